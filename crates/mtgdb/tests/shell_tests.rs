mod common;

use common::DatabaseFixture;
use mtgdb::{Control, Session, Shell};

fn shell(fixture: &DatabaseFixture) -> Shell {
    Shell::new(Session::open(&fixture.settings()).unwrap())
}

fn run(shell: &mut Shell, line: &str) -> (Control, String) {
    let mut out = Vec::new();
    let control = shell.run_line(line, &mut out).unwrap();
    (control, String::from_utf8(out).unwrap())
}

#[test]
fn test_query_then_show() {
    let fixture = DatabaseFixture::new();
    let mut shell = shell(&fixture);

    let (control, table) = run(&mut shell, "query cards w:setCode='LEB'|o:name");
    assert_eq!(control, Control::Continue);
    assert!(table.contains("Llanowar Elves"));
    assert!(table.contains("Shivan Dragon"));
    assert!(!table.contains("Craw Wurm"));
    assert!(table.contains("(2 rows)"));

    let (_, detail) = run(&mut shell, "show 1");
    assert!(detail.contains("Shivan Dragon"));
    assert!(detail.contains("Flying"));
    assert!(!detail.contains("Melissa"));
}

#[test]
fn test_errors_do_not_stop_the_shell() {
    let fixture = DatabaseFixture::new();
    let mut shell = shell(&fixture);

    let (control, out) = run(&mut shell, "show 0");
    assert_eq!(control, Control::Continue);
    assert!(out.starts_with("Error: No results"));

    let (control, out) = run(&mut shell, "query cards w");
    assert_eq!(control, Control::Continue);
    assert!(out.contains("malformed clause"));

    let (control, out) = run(&mut shell, "query nothing_here");
    assert_eq!(control, Control::Continue);
    assert!(out.contains("Entity not found: nothing_here"));

    let (_, out) = run(&mut shell, "bogus");
    assert!(out.contains("Unknown command: bogus"));
}

#[test]
fn test_cols_and_entities() {
    let fixture = DatabaseFixture::new();
    let mut shell = shell(&fixture);

    let (_, out) = run(&mut shell, "%m_cols Set");
    assert!(out.contains("Available: [id, code, block, name, releaseDate, totalSetSize]"));
    assert!(out.contains("Shown: [id, code, block, name, releaseDate]"));

    let (_, out) = run(&mut shell, "entities");
    assert!(out.contains("cards (primary)"));
    assert!(out.contains("copies (secondary)"));
}

#[test]
fn test_sql_rejects_unknown_alias() {
    let fixture = DatabaseFixture::new();
    let mut shell = shell(&fixture);

    let (_, out) = run(&mut shell, "sql nowhere");
    assert!(out.contains("Invalid db alias: [nowhere]"));
}

#[test]
fn test_run_commands_stops_at_exit() {
    let fixture = DatabaseFixture::new();
    let mut shell = shell(&fixture);

    let mut out = Vec::new();
    let control = shell
        .run_commands(["query sets", "exit", "query cards"], &mut out)
        .unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(control, Control::Exit);
    assert!(text.contains("Limited Edition Alpha"));
    assert!(!text.contains("Grizzly Bears"));
    assert_eq!(shell.session().cursor().entity().map(|e| e.name()), Some("sets"));
}

#[test]
fn test_sql_reports_missing_program_and_continues() {
    let fixture = DatabaseFixture::new();
    let mut shell = shell(&fixture).with_sqlite_program("/nonexistent/sqlite3");

    let (control, out) = run(&mut shell, "sql m");
    assert_eq!(control, Control::Continue);
    assert!(out.starts_with("Error: Could not run /nonexistent/sqlite3"));

    let (control, table) = run(&mut shell, "query sets");
    assert_eq!(control, Control::Continue);
    assert!(table.contains("(2 rows)"));
}

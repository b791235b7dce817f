#![no_main]

use libfuzzer_sys::fuzz_target;
use mtgdb_core::query::{parse, Clause, QueryBuilder};
use mtgdb_core::{Entity, EntityCatalog};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to string (ignore invalid UTF-8)
    if let Ok(input) = std::str::from_utf8(data) {
        if input.len() > 10_000 {
            return;
        }

        // Parsing must never panic; a parsed instruction must always build
        // against a catalog that contains its entity.
        if let Ok(instruction) = parse(input) {
            let catalog = EntityCatalog::from_entities([Entity::new(
                instruction.entity.clone(),
                vec!["id".to_string()],
            )]);
            let query = QueryBuilder::new(&catalog)
                .build_instruction(&instruction)
                .expect("entity is in the catalog");

            let last_limit = instruction.clauses.iter().rev().find_map(|c| match c {
                Clause::Limit(n) => Some(*n),
                _ => None,
            });
            assert_eq!(query.limit, last_limit);
            let _ = query.to_sql();
        }
    }
});

#[cfg(test)]
mod tests {
    use ormlite::{Executor, UNNAMED_STATEMENT};
    use ormlite_tests::{BatchItem, Gender, Person, Recorded, ScriptedExecutor, silent_logs};

    const PERSON_INSERT: &str =
        "insert into person(id, name, gender, age, score) values($1, $2, $3, $4, $5);";

    fn items(count: i64) -> Vec<BatchItem> {
        (1..=count)
            .map(|i| BatchItem::new(i, &format!("item {}", i), i as f64 * 1.5, i % 2 == 0))
            .collect()
    }

    #[test]
    fn single() {
        let mut executor = ScriptedExecutor::new();
        assert!(executor.insert(&Person::new(1, "hxf1", Gender::Female, 30, 101.1)));
        assert_eq!(
            executor.recorded,
            [
                Recorded::Prepare {
                    name: UNNAMED_STATEMENT.into(),
                    sql: PERSON_INSERT.into(),
                    param_count: 5,
                },
                Recorded::ExecutePrepared {
                    name: UNNAMED_STATEMENT.into(),
                    params: ["1", "hxf1", "1", "30", "101.1"].map(String::from).into(),
                },
            ]
        );
    }

    #[test]
    fn single_rejected() {
        let mut executor = ScriptedExecutor::new();
        silent_logs! {
            assert!(!executor.insert(&BatchItem::new(1, "bad\0name", 0.0, true)));
        }
        assert_eq!(executor.recorded.len(), 1);
        assert!(matches!(executor.recorded[0], Recorded::Prepare { param_count: 4, .. }));

        let mut executor = ScriptedExecutor::new().fail_on("hxf2");
        silent_logs! {
            assert!(executor.insert(&Person::new(1, "hxf1", Gender::Male, 20, 1.0)));
            assert!(!executor.insert(&Person::new(2, "hxf2", Gender::Male, 20, 1.0)));
        }
        assert_eq!(executor.recorded.len(), 4);
    }

    #[test]
    fn batch_commit() {
        let mut executor = ScriptedExecutor::new();
        assert_eq!(executor.insert_many(&items(5)), 5);
        assert_eq!(executor.statements(), ["begin;", "commit;"]);
        let prepared = executor
            .recorded
            .iter()
            .filter(|v| matches!(v, Recorded::Prepare { .. }))
            .count();
        assert_eq!(prepared, 1);
        let params: Vec<_> = executor
            .recorded
            .iter()
            .filter_map(|v| match v {
                Recorded::ExecutePrepared { params, .. } => Some(params.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(params.len(), 5);
        assert_eq!(params[0], ["1", "item 1", "1.5", "0"]);
        assert_eq!(params[3], ["4", "item 4", "6.0", "1"]);
    }

    #[test]
    fn batch_rollback() {
        let mut items = items(5);
        items.push(BatchItem::new(6, "bad\0name", 0.0, true));
        let mut executor = ScriptedExecutor::new();
        silent_logs! {
            assert_eq!(executor.insert_many(&items), 0);
        }
        assert_eq!(executor.statements(), ["begin;", "rollback;"]);
        assert_eq!(
            executor
                .recorded
                .iter()
                .filter(|v| matches!(v, Recorded::ExecutePrepared { .. }))
                .count(),
            5
        );

        let mut executor = ScriptedExecutor::new().fail_on("item 3");
        silent_logs! {
            assert_eq!(executor.insert_many(&items[..5]), 0);
        }
        assert_eq!(executor.statements(), ["begin;", "rollback;"]);
    }

    #[test]
    fn batch_empty() {
        let mut executor = ScriptedExecutor::new();
        assert_eq!(executor.insert_many::<Person>(&[]), 0);
        assert!(executor.recorded.is_empty());
    }
}

#[cfg(test)]
mod tests {
    use ormlite::{Executor, FixedBuf, FromCells, Row};
    use ormlite_tests::{BatchItem, Gender, Person, Recorded, ScriptedExecutor, silent_logs};

    #[test]
    fn default_select() {
        let mut executor = ScriptedExecutor::new();
        assert_eq!(
            executor.query::<Person>().to_string(),
            "select * from person;"
        );
        assert_eq!(
            executor.query::<Person>().select(()).to_string(),
            "select * from person;"
        );
    }

    #[test]
    fn clauses() {
        let mut executor = ScriptedExecutor::new();
        let query = executor
            .query::<Person>()
            .filter(Person::age.gt(27) & Person::id.lt(3))
            .limit(2);
        assert_eq!(
            query.to_string(),
            "select * from person where (age > 27 and id < 3) limit 2;"
        );
        let query = executor
            .query::<Person>()
            .select((Person::age.bare(), Person::score.sum(), Person::name.count()))
            .filter(Person::age.gt(24) & Person::id.lt(7))
            .limit(3)
            .group_by(Person::age)
            .having(Person::age.lt(40))
            .order_by_desc(Person::age)
            .offset(1);
        assert_eq!(
            query.to_string(),
            "select (age), sum(score), count(name) from person where (age > 24 and id < 7) \
             group by (age) having (age < 40) order by age desc limit 3 offset 1;"
        );
        let query = executor
            .query::<Person>()
            .order_by(Person::id)
            .filter(Person::age.gt(1))
            .filter(Person::age.gt(2));
        assert_eq!(
            query.to_string(),
            "select * from person where (age > 2) order by id asc;"
        );
    }

    #[test]
    fn update_and_delete() {
        let mut executor = ScriptedExecutor::new();
        let query = executor
            .update::<Person>()
            .set(Person::age.set(50).chain(Person::name.set("hxf100")))
            .filter(Person::age.gt(29));
        assert_eq!(
            query.to_string(),
            "update person set age = 50, name = 'hxf100' where (age > 29);"
        );
        assert!(query.execute());
        assert!(executor.del::<Person>().filter(Person::age.gt(29)).execute());
        assert!(executor.del::<Person>().try_execute().is_ok());
        assert_eq!(
            executor.statements(),
            [
                "update person set age = 50, name = 'hxf100' where (age > 29);",
                "delete from person where (age > 29);",
                "delete from person;",
            ]
        );
    }

    #[test]
    fn records() {
        let mut executor = ScriptedExecutor::new();
        executor.push_rows(&[
            &[
                Some("1"),
                Some("hxf1"),
                Some("1"),
                Some("30"),
                Some("101.1"),
            ],
            &[Some("2"), Some("hxf2"), Some("0"), None, Some("bad")],
        ]);
        let result = executor
            .query::<Person>()
            .filter(Person::age.gt(27))
            .to_vector();
        assert_eq!(
            result,
            [
                Person::new(1, "hxf1", Gender::Female, 30, 101.1),
                Person::new(2, "hxf2", Gender::Male, 0, 0.0),
            ]
        );
        assert_eq!(
            executor.recorded,
            [Recorded::Fetch(
                "select * from person where (age > 27);".into()
            )]
        );
    }

    #[test]
    fn tuples() {
        let mut executor = ScriptedExecutor::new();
        executor.push_rows(&[
            &[Some("30"), Some("318.3"), Some("3")],
            &[Some("28"), Some("102.2"), Some("1")],
        ]);
        let result: Vec<(i32, f32, i64)> = executor
            .query::<Person>()
            .select((Person::age.bare(), Person::score.sum(), Person::name.count()))
            .group_by(Person::age)
            .to_vector();
        assert_eq!(result, [(30, 318.3, 3), (28, 102.2, 1)]);

        executor.push_rows(&[&[Some("hxf9"), Some("5")]]);
        let result = executor
            .query::<Person>()
            .select((Person::name.bare(), Person::id.max()))
            .fetch()
            .expect("The query should succeed");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].0, FixedBuf::from("hxf9"));
        assert_eq!(result[0].1, 5);

        executor.push_rows(&[&[Some("7")], &[Some("8")]]);
        let result = executor
            .query::<BatchItem>()
            .select(BatchItem::id.bare())
            .to_vector();
        assert_eq!(result, [7, 8]);
    }

    #[test]
    fn nested_records() {
        let cells = [
            Some("9"),
            Some("1"),
            Some("ann"),
            Some("1"),
            Some("41"),
            Some("2.5"),
            Some("tail"),
        ]
        .map(|v| v.map(String::from));
        let mut column = 0;
        let (count, person, label): (i64, Person, String) =
            FromCells::from_cells(Row::new(&cells), &mut column);
        assert_eq!(count, 9);
        assert_eq!(person, Person::new(1, "ann", Gender::Female, 41, 2.5));
        assert_eq!(label, "tail");
        assert_eq!(column, 7);

        let (first, second) = <(Person, Person)>::from_row_start(Row::new(&cells[1..]));
        assert_eq!(first, person);
        assert_eq!(second, Person::new(0, "", Gender::Male, 0, 0.0));

        let mut column = 1;
        let person = Person::from_cells(Row::new(&cells), &mut column);
        assert_eq!(person.name, "ann");
        assert_eq!(column, 6);
    }

    #[test]
    fn empty_and_failure() {
        let mut executor = ScriptedExecutor::new();
        assert!(executor.query::<Person>().to_vector().is_empty());

        let mut executor = ScriptedExecutor::new().fail_on("person");
        executor.push_rows(&[&[Some("1")]]);
        silent_logs! {
            assert!(executor.query::<Person>().to_vector().is_empty());
            assert!(executor.query::<Person>().fetch().is_err());
            assert!(!executor.del::<Person>().execute());
            assert!(executor.update::<Person>().set(Person::age.set(1)).try_execute().is_err());
        }
        assert_eq!(executor.results.len(), 1);
    }

    #[test]
    #[should_panic]
    fn cross_table_filter() {
        let mut executor = ScriptedExecutor::new();
        let _ = executor.query::<Person>().filter(BatchItem::id.gt(1));
    }

    #[test]
    #[should_panic]
    fn cross_table_select() {
        let mut executor = ScriptedExecutor::new();
        let _ = executor
            .query::<Person>()
            .select((Person::age.bare(), BatchItem::id.count()));
    }
}

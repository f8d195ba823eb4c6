use ormlite::{Constraint, Entity, Executor, FieldValue, FixedBuf};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, FieldValue)]
#[repr(i32)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

#[derive(Default, Debug, Clone, PartialEq, Entity)]
pub struct Person {
    pub id: i16,
    pub name: FixedBuf<10>,
    pub gender: Gender,
    pub age: i32,
    pub score: f32,
}

impl Person {
    pub fn new(id: i16, name: &str, gender: Gender, age: i32, score: f32) -> Self {
        Self {
            id,
            name: name.into(),
            gender,
            age,
            score,
        }
    }
}

pub fn person<X: Executor>(executor: &mut X) {
    executor
        .drop_table::<Person>(true)
        .expect("Failed to drop the person table");
    executor
        .create_table::<Person>(&[
            Constraint::PrimaryKey("id"),
            Constraint::not_null(["id", "age"]),
        ])
        .expect("Failed to create the person table");

    for person in [
        Person::new(1, "hxf1", Gender::Female, 30, 101.1),
        Person::new(2, "hxf2", Gender::Female, 28, 102.2),
        Person::new(3, "hxf3", Gender::Male, 27, 103.3),
        Person::new(4, "hxf4", Gender::Female, 26, 104.4),
        Person::new(5, "hxf1", Gender::Male, 30, 108.1),
        Person::new(6, "hxf3", Gender::Female, 30, 109.1),
    ] {
        assert!(executor.insert(&person), "Failed to insert {:?}", person);
    }
    let persons: Vec<_> = (6..10)
        .map(|i| {
            Person::new(
                i + 1,
                &format!("hxf{}", i + 1),
                Gender::Male,
                30 + i as i32,
                101.1 + i as f32,
            )
        })
        .collect();
    assert_eq!(executor.insert_many(&persons), 4);

    // Records
    let mut result = executor
        .query::<Person>()
        .filter(Person::age.gt(27) & Person::id.lt(3))
        .limit(2)
        .to_vector();
    result.sort_by_key(|p| p.id);
    assert_eq!(
        result,
        [
            Person::new(1, "hxf1", Gender::Female, 30, 101.1),
            Person::new(2, "hxf2", Gender::Female, 28, 102.2),
        ]
    );

    // Tuples
    let mut result = executor
        .query::<Person>()
        .select((
            Person::id.bare(),
            Person::name.bare(),
            Person::gender.bare(),
            Person::age.bare(),
        ))
        .filter(Person::age.ge(28) & Person::id.lt(5))
        .to_vector();
    result.sort_by_key(|v| v.0);
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].0, 1);
    assert_eq!(result[0].1, "hxf1");
    assert_eq!(result[0].2, Gender::Female);
    assert_eq!(result[0].3, 30);
    assert_eq!(result[1].0, 2);
    assert_eq!(result[1].1, "hxf2");
    assert_eq!(result[1].3, 28);

    // Aggregates with grouping
    let result = executor
        .query::<Person>()
        .select((Person::age.bare(), Person::score.sum(), Person::name.count()))
        .filter(Person::age.gt(24) & Person::id.lt(7))
        .limit(3)
        .group_by(Person::age)
        .order_by_desc(Person::age)
        .to_vector();
    assert_eq!(
        result.iter().map(|v| (v.0, v.2)).collect::<Vec<_>>(),
        [(30, 3), (28, 1), (27, 1)]
    );
    assert!((result[0].1 - 318.3).abs() < 0.01);
    assert!((result[1].1 - 102.2).abs() < 0.01);
    assert!((result[2].1 - 103.3).abs() < 0.01);

    // Update
    assert!(
        executor
            .update::<Person>()
            .set(Person::age.set(50).chain(Person::name.set("hxf100")))
            .filter(Person::age.gt(29))
            .execute()
    );
    let result = executor.query::<Person>().to_vector();
    assert_eq!(result.len(), 10);
    let updated: Vec<_> = result.iter().filter(|p| p.age == 50).collect();
    assert_eq!(updated.len(), 7);
    assert!(updated.iter().all(|p| p.name == "hxf100"));

    // Delete
    assert!(
        executor
            .del::<Person>()
            .filter(Person::age.gt(29))
            .execute()
    );
    let result = executor.query::<Person>().order_by(Person::id).to_vector();
    assert_eq!(result.iter().map(|p| p.id).collect::<Vec<_>>(), [2, 3, 4]);
}

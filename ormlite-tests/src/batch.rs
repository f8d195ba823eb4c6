use ormlite::{Constraint, Entity, Executor};

#[derive(Default, Debug, Clone, PartialEq, Entity)]
#[ormlite(name = "batch_item")]
pub struct BatchItem {
    pub id: i64,
    pub label: String,
    pub price: f64,
    pub active: bool,
}

impl BatchItem {
    pub fn new(id: i64, label: &str, price: f64, active: bool) -> Self {
        Self {
            id,
            label: label.into(),
            price,
            active,
        }
    }
}

pub fn batch<X: Executor>(executor: &mut X) {
    executor
        .drop_table::<BatchItem>(true)
        .expect("Failed to drop the batch_item table");
    executor
        .create_table::<BatchItem>(&[Constraint::PrimaryKey("id")])
        .expect("Failed to create the batch_item table");

    // A record that cannot be encoded rolls back the whole batch
    let mut items: Vec<_> = (1..=5)
        .map(|i| BatchItem::new(i, &format!("item {}", i), i as f64 * 1.5, i % 2 == 0))
        .collect();
    items.push(BatchItem::new(6, "bad\0name", 0.0, true));
    assert_eq!(executor.insert_many(&items), 0);
    assert!(executor.query::<BatchItem>().to_vector().is_empty());

    items.pop();
    assert_eq!(executor.insert_many(&items), 5);
    let result = executor
        .query::<BatchItem>()
        .order_by(BatchItem::id)
        .to_vector();
    assert_eq!(result, items);

    let result = executor
        .query::<BatchItem>()
        .filter(BatchItem::active.eq(true))
        .order_by_desc(BatchItem::price)
        .to_vector();
    assert_eq!(
        result.iter().map(|v| v.id).collect::<Vec<_>>(),
        [4, 2]
    );

    let result = executor
        .query::<BatchItem>()
        .filter(BatchItem::label % "item%" & BatchItem::price.le(4.5))
        .order_by(BatchItem::id)
        .offset(1)
        .limit(2)
        .to_vector();
    assert_eq!(
        result.iter().map(|v| v.id).collect::<Vec<_>>(),
        [2, 3]
    );
}

use ormlite::{Constraint, Entity, Executor, Expr};

#[derive(Default, Debug, Clone, PartialEq, Entity)]
struct MatchScore {
    id: i32,
    player: String,
    points: i64,
    #[ormlite(name = "level")]
    stage: u8,
}

pub fn aggregates<X: Executor>(executor: &mut X) {
    executor
        .drop_table::<MatchScore>(true)
        .expect("Failed to drop the match_score table");
    executor
        .create_table::<MatchScore>(&[
            Constraint::PrimaryKey("id"),
            Constraint::not_null(["player", "points"]),
        ])
        .expect("Failed to create the match_score table");
    let scores = [
        (1, "ada", 10, 1),
        (2, "ada", 30, 2),
        (3, "bob", 20, 1),
        (4, "bob", 8, 3),
        (5, "bob", 15, 2),
        (6, "cyd", 40, 3),
    ]
    .map(|(id, player, points, stage)| MatchScore {
        id,
        player: player.into(),
        points,
        stage,
    });
    assert_eq!(executor.insert_many(&scores), 6);

    let result = executor
        .query::<MatchScore>()
        .select((
            MatchScore::points.sum(),
            MatchScore::points.max(),
            MatchScore::points.min(),
            MatchScore::points.avg(),
            MatchScore::player.count(),
        ))
        .to_vector();
    assert_eq!(result, [(123, 40, 8, 20, 6)]);

    let result = executor
        .query::<MatchScore>()
        .select((MatchScore::stage.bare(), MatchScore::id.count()))
        .filter(MatchScore::points.ge(10))
        .group_by(MatchScore::stage)
        .order_by(MatchScore::stage)
        .to_vector();
    assert_eq!(result, [(1, 2), (2, 2), (3, 1)]);

    let result = executor
        .query::<MatchScore>()
        .select((MatchScore::player.bare(), MatchScore::points.sum()))
        .group_by(MatchScore::player)
        .having(Expr::field_ref(MatchScore::table_name(), "count(id)").gt(1))
        .order_by_desc(Expr::field_ref(MatchScore::table_name(), "sum(points)"))
        .to_vector();
    assert_eq!(result, [("bob".to_string(), 43), ("ada".to_string(), 40)]);
}

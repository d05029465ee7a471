//! Exercises one materialization end to end: Alice owns a board, trusts
//! Bob, and Bob moves Alice's task into a new column from his own
//! repository. Prints the resulting column view. Not a CLI front end —
//! see `SPEC_FULL.md` §0 for why that stays out of scope here.

use skyboard::{
    init_tracing, materialize, ColumnId, FieldDelta, MaterializeInput, NullDiagnostics, Op,
};
use skyboard_base::Did;
use skyboard_test::{t, BoardFixture, ScenarioBuilder, TaskFixture};

fn main() {
    init_tracing();

    let board = BoardFixture::new("alice", "b1");
    let board_uri = board.uri();
    let task = TaskFixture::new("alice", "t1", board_uri.clone(), "Fix login bug")
        .created_at(t(0))
        .build();
    let task_uri = task.task_uri();

    let op = Op {
        owner: Did::from("bob"),
        rkey: "o1".into(),
        target_task_uri: task_uri,
        board_uri,
        delta: FieldDelta {
            column_id: Some(ColumnId("doing".into())),
            ..Default::default()
        },
        created_at: t(2),
    };

    let scenario = ScenarioBuilder::new(board.build())
        .with_task(task)
        .with_op(op)
        .trust(Did::from("bob"));

    let viewer = Did::from("alice");
    let input: MaterializeInput = scenario.input(&viewer);
    let output = materialize(&input, &NullDiagnostics);

    for (column, tasks) in &output.columns {
        println!("{}:", column.0);
        for task in tasks {
            println!(
                "  {} (last touched by {})",
                task.title, task.last_modified_by
            );
        }
    }
}

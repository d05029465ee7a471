use skyboard_base::{Did, Rkey, Timestamp};
use skyboard_model::{Board, Collection, Column, ColumnId, LabelId, RecordUri, Task};

/// Fixed base timestamp every fixture seeds from, so scenario tests
/// compare against literal strings instead of wall-clock values.
pub fn t0() -> Timestamp {
    "2024-01-01T00:00:00.000Z".parse().unwrap()
}

/// `t0` plus `n` whole seconds — enough separation for LWW ordering
/// assertions without timestamp collisions.
pub fn t(n: i64) -> Timestamp {
    Timestamp::from_datetime(t0().to_datetime() + chrono::Duration::seconds(n))
}

pub struct BoardFixture {
    board: Board,
}

impl BoardFixture {
    pub fn new(owner: &str, rkey: &str) -> Self {
        BoardFixture {
            board: Board {
                owner: Did::from(owner),
                rkey: Rkey::from(rkey),
                columns: vec![
                    Column {
                        id: ColumnId("todo".into()),
                        name: "Todo".into(),
                        order: 0,
                    },
                    Column {
                        id: ColumnId("doing".into()),
                        name: "Doing".into(),
                        order: 1,
                    },
                    Column {
                        id: ColumnId("done".into()),
                        name: "Done".into(),
                        order: 2,
                    },
                ],
                labels: vec![],
                open: false,
                created_at: t0(),
            },
        }
    }

    pub fn open(mut self) -> Self {
        self.board.open = true;
        self
    }

    pub fn column(mut self, id: &str, name: &str, order: i64) -> Self {
        self.board.columns.push(Column {
            id: ColumnId(id.into()),
            name: name.into(),
            order,
        });
        self
    }

    pub fn uri(&self) -> RecordUri {
        self.board.board_uri()
    }

    pub fn build(self) -> Board {
        self.board
    }
}

pub struct TaskFixture {
    task: Task,
}

impl TaskFixture {
    pub fn new(owner: &str, rkey: &str, board_uri: RecordUri, title: &str) -> Self {
        TaskFixture {
            task: Task {
                owner: Did::from(owner),
                rkey: Rkey::from(rkey),
                board_uri,
                title: title.into(),
                description: None,
                column_id: ColumnId("todo".into()),
                position: Some("a0".parse().unwrap()),
                order: None,
                label_ids: None,
                created_at: t0(),
            },
        }
    }

    pub fn column(mut self, id: &str) -> Self {
        self.task.column_id = ColumnId(id.into());
        self
    }

    pub fn position(mut self, position: &str) -> Self {
        self.task.position = Some(position.parse().unwrap());
        self
    }

    pub fn created_at(mut self, at: Timestamp) -> Self {
        self.task.created_at = at;
        self
    }

    pub fn label(mut self, id: &str) -> Self {
        self.task
            .label_ids
            .get_or_insert_with(Vec::new)
            .push(LabelId(id.into()));
        self
    }

    pub fn uri(&self) -> RecordUri {
        self.task.task_uri()
    }

    pub fn build(self) -> Task {
        self.task
    }
}

pub fn collection_uri(party: &str, collection: Collection, rkey: &str) -> RecordUri {
    RecordUri::new(Did::from(party), collection, Rkey::from(rkey))
}

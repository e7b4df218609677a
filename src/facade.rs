// Pattern 2: Facade - one entry point over a group of collaborators
// `StudentApi::welcome_new_student` sequences record creation, activity
// logging and id assignment. The collaborators stay usable on their own.

use chrono::{SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::fmt;
use std::ops::RangeInclusive;
use std::rc::Rc;
use std::str::FromStr;

use crate::config::DemoConfig;
use crate::console::Console;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub name: String,
    pub id: Option<u32>,
}

/// In-memory student table shared by the collaborators. Clones share rows.
#[derive(Debug, Clone, Default)]
pub struct StudentTable {
    rows: Rc<RefCell<Vec<StudentRecord>>>,
}

impl StudentTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }

    /// Snapshot of every row, in insertion order.
    pub fn records(&self) -> Vec<StudentRecord> {
        self.rows.borrow().clone()
    }

    pub fn find(&self, name: &str) -> Option<StudentRecord> {
        self.rows
            .borrow()
            .iter()
            .find(|student| student.name == name)
            .cloned()
    }

    fn push(&self, record: StudentRecord) {
        self.rows.borrow_mut().push(record);
    }

    /// Runs `assign` on the first row named `name` that has no id yet.
    fn with_first_unassigned<R>(
        &self,
        name: &str,
        assign: impl FnOnce(&mut StudentRecord) -> R,
    ) -> Option<R> {
        let mut rows = self.rows.borrow_mut();
        let result = rows
            .iter_mut()
            .find(|student| student.name == name && student.id.is_none())
            .map(assign);
        result
    }
}

// ============================================================================
// Collaborators
// ============================================================================

pub struct Student {
    db: StudentTable,
    console: Console,
}

impl Student {
    pub fn new(db: StudentTable, console: Console) -> Self {
        Self { db, console }
    }

    /// Appends `{name}` without an id. Duplicate names are allowed.
    pub fn add_student(&self, name: &str) {
        self.db.push(StudentRecord {
            name: name.to_string(),
            id: None,
        });
        tracing::debug!(name, rows = self.db.len(), "student added");
    }

    /// Prints the first record named `name`, if any, and returns it.
    pub fn print_student_info(&self, name: &str) -> Option<StudentRecord> {
        let student = self.db.find(name)?;
        let id = student
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "unassigned".to_string());
        self.console
            .line(format!("STUDENT INFO:\nName: {} Id: {}\n", student.name, id));
        Some(student)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogAction {
    Joined,
    AssignedId,
}

impl LogAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogAction::Joined => "JOINED",
            LogAction::AssignedId => "ASSIGNED_ID",
        }
    }
}

impl fmt::Display for LogAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLogAction(pub String);

impl FromStr for LogAction {
    type Err = UnknownLogAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "JOINED" => Ok(LogAction::Joined),
            "ASSIGNED_ID" => Ok(LogAction::AssignedId),
            other => Err(UnknownLogAction(other.to_string())),
        }
    }
}

pub struct StudentLog {
    console: Console,
}

impl StudentLog {
    pub fn new(console: Console) -> Self {
        Self { console }
    }

    pub fn log_activity(&self, name: &str, action: LogAction) {
        let time_stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let message = match action {
            LogAction::Joined => format!("A new student with name {} joined our class.", name),
            LogAction::AssignedId => format!("An ID was assigned to student {}.", name),
        };
        self.console
            .line(format!("LOG: {}@{} - {}", action, time_stamp, message));
    }

    /// Like [`log_activity`](Self::log_activity) for a raw tag. Unknown tags
    /// print nothing and report `false`.
    pub fn log_activity_tag(&self, name: &str, tag: &str) -> bool {
        match tag.parse::<LogAction>() {
            Ok(action) => {
                self.log_activity(name, action);
                true
            }
            Err(UnknownLogAction(tag)) => {
                tracing::debug!(name, tag = %tag, "ignoring unknown log action");
                false
            }
        }
    }
}

pub struct AssignStudentId {
    db: StudentTable,
    rng: StdRng,
    range: RangeInclusive<u32>,
}

impl AssignStudentId {
    pub fn new(db: StudentTable, rng: StdRng, range: RangeInclusive<u32>) -> Self {
        Self { db, rng, range }
    }

    pub fn from_config(db: StudentTable, config: &DemoConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(db, rng, config.student_ids.as_range())
    }

    /// Gives the first not-yet-numbered student called `name` a random id.
    /// Returns `None` without touching the table when there is no such
    /// student. Ids may collide; nothing checks.
    pub fn assign_id(&mut self, name: &str) -> Option<u32> {
        let id = self.rng.gen_range(self.range.clone());
        let assigned = self.db.with_first_unassigned(name, |student| {
            student.id = Some(id);
            id
        });
        tracing::debug!(name, ?assigned, "assign id");
        assigned
    }
}

// ============================================================================
// Facade
// ============================================================================

pub struct StudentApi {
    student: Student,
    logger: StudentLog,
    id_manager: AssignStudentId,
}

impl StudentApi {
    pub fn new(student: Student, logger: StudentLog, id_manager: AssignStudentId) -> Self {
        Self {
            student,
            logger,
            id_manager,
        }
    }

    /// Wires all three collaborators to one table and console.
    pub fn with_config(db: StudentTable, console: Console, config: &DemoConfig) -> Self {
        Self::new(
            Student::new(db.clone(), console.clone()),
            StudentLog::new(console),
            AssignStudentId::from_config(db, config),
        )
    }

    pub fn welcome_new_student(&mut self, name: &str) -> Option<StudentRecord> {
        self.student.add_student(name);
        self.logger.log_activity(name, LogAction::Joined);
        self.id_manager.assign_id(name);
        self.logger.log_activity(name, LogAction::AssignedId);
        self.student.print_student_info(name)
    }
}

// ============================================================================
// Tests
// ============================================================================

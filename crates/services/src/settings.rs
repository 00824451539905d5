use usability_core::model::{NamePolicy, TaskCatalog};

/// Study-wide knobs chosen at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudySettings {
    pub name_policy: NamePolicy,
    pub task_catalog: TaskCatalog,
}

impl StudySettings {
    #[must_use]
    pub fn with_name_policy(mut self, name_policy: NamePolicy) -> Self {
        self.name_policy = name_policy;
        self
    }

    #[must_use]
    pub fn with_task_catalog(mut self, task_catalog: TaskCatalog) -> Self {
        self.task_catalog = task_catalog;
        self
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four independent record kinds, each with its own backing file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Consent,
    Demographic,
    Task,
    Exit,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Consent,
        Category::Demographic,
        Category::Task,
        Category::Exit,
    ];

    /// File stem of the category's backing file (without extension).
    #[must_use]
    pub fn file_stem(self) -> &'static str {
        match self {
            Category::Consent => "consent_data",
            Category::Demographic => "demographic_data",
            Category::Task => "task_data",
            Category::Exit => "exit_data",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Consent => "consent",
            Category::Demographic => "demographic",
            Category::Task => "task",
            Category::Exit => "exit",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//! Main menu

/// Menu actions, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ShowSummary,
    ShowChart,
    ViewExpenses,
    Export,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order
    pub fn all() -> &'static [Self] {
        &[
            Self::AddExpense,
            Self::ShowSummary,
            Self::ShowChart,
            Self::ViewExpenses,
            Self::Export,
            Self::Exit,
        ]
    }

    /// Menu keys, "1" through "6"
    pub fn keys() -> [&'static str; 6] {
        ["1", "2", "3", "4", "5", "6"]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::AddExpense => "1",
            Self::ShowSummary => "2",
            Self::ShowChart => "3",
            Self::ViewExpenses => "4",
            Self::Export => "5",
            Self::Exit => "6",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddExpense => "Add Expense",
            Self::ShowSummary => "Show Budget Summary",
            Self::ShowChart => "Show Pie Chart",
            Self::ViewExpenses => "View Expenses by Category with Running Balance",
            Self::Export => "Export Expenses to CSV",
            Self::Exit => "Exit",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.key() == key)
    }
}

/// The menu block printed before each choice
pub fn format_menu() -> String {
    let mut output = String::from("\nOptions:");
    for choice in MenuChoice::all() {
        output.push_str(&format!("\n{}. {}", choice.key(), choice.label()));
    }
    output
}

//! File menu actions
//!
//! None of the actions are implemented yet; choosing one only closes the
//! menu and logs which item was picked.

use serde::Deserialize;
use tracing::info;

/// Items of the File menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum MenuAction {
    NewProject,
    OpenProject,
    SaveProject,
    SaveProjectAs,
    ImportAudio,
    ExportAudio,
    Exit,
}

impl MenuAction {
    /// Menu items in display order, grouped by separators
    pub const GROUPS: &'static [&'static [MenuAction]] = &[
        &[
            MenuAction::NewProject,
            MenuAction::OpenProject,
            MenuAction::SaveProject,
            MenuAction::SaveProjectAs,
        ],
        &[MenuAction::ImportAudio],
        &[MenuAction::ExportAudio],
        &[MenuAction::Exit],
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::NewProject => "New Project",
            MenuAction::OpenProject => "Open Project",
            MenuAction::SaveProject => "Save Project",
            MenuAction::SaveProjectAs => "Save Project As",
            MenuAction::ImportAudio => "Import Audio File",
            MenuAction::ExportAudio => "Export Audio",
            MenuAction::Exit => "Exit",
        }
    }

    /// Parse a snake_case action name (as used in scenario scripts)
    pub fn from_name(name: &str) -> Option<MenuAction> {
        match name {
            "new_project" => Some(MenuAction::NewProject),
            "open_project" => Some(MenuAction::OpenProject),
            "save_project" => Some(MenuAction::SaveProject),
            "save_project_as" => Some(MenuAction::SaveProjectAs),
            "import_audio" => Some(MenuAction::ImportAudio),
            "export_audio" => Some(MenuAction::ExportAudio),
            "exit" => Some(MenuAction::Exit),
            _ => None,
        }
    }

    /// Run the action
    pub fn perform(&self) {
        info!("[MENU] '{}' selected (not implemented)", self.label());
    }
}

impl TryFrom<String> for MenuAction {
    type Error = String;

    fn try_from(name: String) -> std::result::Result<Self, Self::Error> {
        MenuAction::from_name(&name).ok_or_else(|| format!("Unknown menu action '{}'", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order() {
        let labels: Vec<_> = MenuAction::GROUPS
            .iter()
            .flat_map(|group| group.iter().map(|a| a.label()))
            .collect();
        assert_eq!(
            labels,
            vec![
                "New Project",
                "Open Project",
                "Save Project",
                "Save Project As",
                "Import Audio File",
                "Export Audio",
                "Exit",
            ]
        );
        assert_eq!(MenuAction::GROUPS.len(), 4);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(
            MenuAction::from_name("save_project_as"),
            Some(MenuAction::SaveProjectAs)
        );
        assert_eq!(MenuAction::from_name("print"), None);
    }
}

mod args;
mod commands;
mod dispatch;


pub use commands::build_cli;
pub use dispatch::RenderParams;

/// Entity kinds the CLI can build queries for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    Project,
    Projects,
    Folders,
    Subsets,
    Versions,
    Representations,
}

impl Entity {
    pub const ALL: [Entity; 6] = [
        Entity::Project,
        Entity::Projects,
        Entity::Folders,
        Entity::Subsets,
        Entity::Versions,
        Entity::Representations,
    ];

    /// Subcommand name.
    pub fn name(self) -> &'static str {
        match self {
            Entity::Project => "project",
            Entity::Projects => "projects",
            Entity::Folders => "folders",
            Entity::Subsets => "subsets",
            Entity::Versions => "versions",
            Entity::Representations => "representations",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.name() == name)
    }

    /// Whether the query is scoped to a single project (`--project`).
    pub fn has_project(self) -> bool {
        !matches!(self, Entity::Projects)
    }

    /// List-valued args and the query variables they fill.
    pub fn list_filters(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Entity::Project | Entity::Projects => &[],
            Entity::Folders => &[
                ("ids", "folderIds"),
                ("parent_ids", "parentFolderIds"),
                ("paths", "folderPaths"),
                ("names", "folderNames"),
            ],
            Entity::Subsets => &[
                ("ids", "subsetIds"),
                ("names", "subsetNames"),
                ("folder_ids", "folderIds"),
            ],
            Entity::Versions => &[("ids", "versionIds"), ("subset_ids", "subsetIds")],
            Entity::Representations => &[
                ("ids", "representationIds"),
                ("names", "representationNames"),
                ("version_ids", "versionIds"),
            ],
        }
    }

    /// Boolean flags and the query variables they set to `true`.
    pub fn flag_filters(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Entity::Folders => &[("has_subsets", "folderHasSubsets")],
            Entity::Versions => &[("hero", "heroOnly"), ("latest", "latestOnly")],
            _ => &[],
        }
    }
}

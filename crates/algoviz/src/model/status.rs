use serde::{Deserialize, Serialize};

/// Visual role of a bar, tree node, graph node or graph edge.
///
/// One closed set is shared by every domain; each family only uses the tags
/// that are meaningful to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Default,
    Comparing,
    Swapping,
    Overwriting,
    /// Terminal: never reverts once set.
    Sorted,
    Active,
    LeftHalf,
    RightHalf,
    Visited,
}

impl Status {
    #[inline]
    pub fn is_sorted(self) -> bool {
        self == Status::Sorted
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Default => "DEFAULT",
            Status::Comparing => "COMPARING",
            Status::Swapping => "SWAPPING",
            Status::Overwriting => "OVERWRITING",
            Status::Sorted => "SORTED",
            Status::Active => "ACTIVE",
            Status::LeftHalf => "LEFT_HALF",
            Status::RightHalf => "RIGHT_HALF",
            Status::Visited => "VISITED",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

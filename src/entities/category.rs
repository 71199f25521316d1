use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Nature,
    Culture,
    Entertainment,
}

impl Category {
    pub const ALL: [Category; 3] = [Self::Nature, Self::Culture, Self::Entertainment];

    pub fn name(&self) -> String {
        match self {
            Self::Nature => "Nature".into(),
            Self::Culture => "Culture".into(),
            Self::Entertainment => "Entertainment".into(),
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Nature
    }
}

//! Relationship-manager contact record for the contact panel.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisor {
    pub name: String,
    pub title: String,
    pub phone: String,
    pub email: String,
    pub office: String,
    pub languages: Vec<String>,
}

pub fn mock_advisor() -> Advisor {
    Advisor {
        name: "Claudia Berther".to_string(),
        title: "Senior Relationship Manager".to_string(),
        phone: "+41 44 555 01 23".to_string(),
        email: "claudia.berther@example-privatbank.ch".to_string(),
        office: "Bahnhofstrasse 17, 8001 Zürich".to_string(),
        languages: vec![
            "German".to_string(),
            "English".to_string(),
            "Romansh".to_string(),
        ],
    }
}

use std::collections::BTreeMap;

use vitrine_core::{Business, DayHours, Hours};

pub(crate) fn business() -> Business {
    let mut week = BTreeMap::new();
    week.insert(
        "monday".to_string(),
        DayHours {
            open: Some("09:00".to_string()),
            close: Some("18:00".to_string()),
            closed: false,
        },
    );
    week.insert(
        "sunday".to_string(),
        DayHours {
            open: None,
            close: None,
            closed: true,
        },
    );

    Business {
        id: 42,
        name: "Le Délice".to_string(),
        category: "restaurant".to_string(),
        description: Some("Cuisine maison au coeur de Lyon.".to_string()),
        address: Some("12 rue des Lilas, Lyon".to_string()),
        phone: Some("04 78 00 00 00".to_string()),
        email: Some("contact@ledelice.fr".to_string()),
        website: None,
        facebook: Some("ledelice".to_string()),
        instagram: Some("@ledelice".to_string()),
        tiktok: None,
        youtube: Some("https://youtube.com/@ledelice".to_string()),
        hours: Some(Hours::Weekly(week)),
        services: Some(
            "Entrées, Plats, Desserts, Vins, Cafés, Traiteur, Privatisation, Brunch".to_string(),
        ),
        images: vec!["https://cdn.example.com/salle.jpg".to_string()],
        hero_image: None,
    }
}

/// A business with nothing but the required fields.
pub(crate) fn bare_business() -> Business {
    Business {
        id: 43,
        name: "Atelier Sans Nom".to_string(),
        category: "artisan".to_string(),
        description: None,
        address: None,
        phone: None,
        email: None,
        website: None,
        facebook: None,
        instagram: None,
        tiktok: None,
        youtube: None,
        hours: None,
        services: None,
        images: Vec::new(),
        hero_image: None,
    }
}

use serde::Serialize;

use crate::inventory::item::Item;

/// Built-in dataset every page starts from.
pub fn seed_items() -> Vec<Item> {
    [
        (1, "Paracetamol 500mg", "Pain Relief", 150, 50),
        (2, "Ibuprofen 400mg", "Pain Relief", 25, 50),
        (3, "Amoxicillin 250mg", "Antibiotics", 0, 30),
        (4, "Aspirin 100mg", "Pain Relief", 200, 50),
        (5, "Insulin Vial", "Diabetes", 45, 40),
        (6, "Bandages", "First Aid", 300, 100),
        (7, "Gauze Pads", "First Aid", 15, 50),
        (8, "Antiseptic Solution", "First Aid", 80, 50),
        (9, "Metformin 500mg", "Diabetes", 120, 50),
        (10, "Ciprofloxacin 500mg", "Antibiotics", 60, 50),
        (11, "Syringes 5ml", "Medical Supplies", 200, 100),
        (12, "Gloves (Box)", "Medical Supplies", 35, 50),
        (13, "Face Masks (Box)", "Medical Supplies", 500, 200),
        (14, "Thermometer", "Medical Equipment", 8, 10),
        (15, "Blood Pressure Monitor", "Medical Equipment", 12, 10),
    ]
    .into_iter()
    .map(|(id, name, category, quantity, threshold)| {
        Item::new(id, name, category, quantity, threshold)
    })
    .collect()
}

/// Monthly usage figure for the consumption chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsagePoint {
    pub month: &'static str,
    pub usage: u64,
}

/// Fixed six-month consumption series shown on the dashboard.
pub fn consumption_series() -> [UsagePoint; 6] {
    [
        ("Jan", 450),
        ("Feb", 520),
        ("Mar", 480),
        ("Apr", 610),
        ("May", 550),
        ("Jun", 680),
    ]
    .map(|(month, usage)| UsagePoint { month, usage })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::aggregate;

    #[test]
    fn seed_has_unique_sequential_ids() {
        let ids: Vec<u32> = seed_items().iter().map(|i| i.id).collect();
        assert_eq!(ids, (1..=15).collect::<Vec<_>>());
    }

    #[test]
    fn seed_status_mix() {
        let stats = aggregate(&seed_items());
        assert_eq!(stats.total, 15);
        assert_eq!(stats.out_of_stock, 1);
        assert_eq!(stats.low_stock, 4);
        assert_eq!(stats.in_stock, 10);
    }
}

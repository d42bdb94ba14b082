/// The eco-habits tracked out of the box, in button/chart order.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Used Bicycle/Walked Instead of Vehicle",
    "Saved Water",
    "Recycled Waste",
    "Avoided Plastic",
    "Planted a Tree/Plant",
    "Saved Electricity",
];

pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

//! Seed data for the catalog actor: four stalls across three floors.

use crate::model::{DietaryTag, Menu, MenuCategory, MenuItem, Stall, Vendor, VendorId};
use DietaryTag::{Egg, Jain, NonVeg, Vegan, Veg};

/// All seeded stalls, in catalog order.
pub fn stalls() -> Vec<Stall> {
    vec![
        Stall {
            vendor: vendor(
                "1",
                "South Delights",
                "Ground Floor",
                "G-01",
                "South Indian",
                true,
                4.5,
                "12-15 min",
                &["Dosa", "Idli", "Vada"],
                &[Veg, Jain],
            ),
            menu: Menu {
                categories: vec![
                    category(
                        "Main Dishes",
                        vec![
                            MenuItem::new("1", "Masala Dosa", 80, "Crispy dosa with spiced potato filling", true, &[Veg]),
                            MenuItem::new("2", "Rava Idli", 60, "Soft steamed idli made with semolina", true, &[Veg]),
                            MenuItem::new("3", "Medu Vada", 50, "Crispy lentil donuts", false, &[Veg]),
                        ],
                    ),
                    category(
                        "Beverages",
                        vec![
                            MenuItem::new("4", "Filter Coffee", 25, "Traditional South Indian coffee", true, &[Veg]),
                            MenuItem::new("5", "Masala Chai", 20, "Spiced tea", true, &[Veg]),
                        ],
                    ),
                ],
            },
        },
        Stall {
            vendor: vendor(
                "2",
                "North Spice Corner",
                "1st Floor",
                "F1-03",
                "North Indian",
                true,
                4.2,
                "15-20 min",
                &["Roti", "Dal", "Paneer"],
                &[Veg, NonVeg],
            ),
            menu: Menu {
                categories: vec![category(
                    "Main Dishes",
                    vec![
                        MenuItem::new("6", "Butter Roti", 15, "Soft wheat bread with butter", true, &[Veg]),
                        MenuItem::new("7", "Dal Tadka", 90, "Yellow lentils with tempering", true, &[Veg]),
                        MenuItem::new("8", "Paneer Butter Masala", 140, "Cottage cheese in rich tomato gravy", true, &[Veg]),
                    ],
                )],
            },
        },
        Stall {
            vendor: vendor(
                "3",
                "Healthy Bites",
                "Ground Floor",
                "G-05",
                "Salads & Healthy",
                false,
                4.7,
                "8-10 min",
                &["Caesar Salad", "Protein Bowl", "Fresh Juice"],
                &[Veg, Vegan],
            ),
            menu: Menu {
                categories: vec![category(
                    "Salads",
                    vec![
                        MenuItem::new("9", "Caesar Salad", 120, "Fresh lettuce with caesar dressing", true, &[Veg]),
                        MenuItem::new("10", "Protein Bowl", 150, "Quinoa with grilled vegetables", true, &[Vegan]),
                        MenuItem::new("11", "Fresh Juice", 60, "Seasonal fruit juice", false, &[Vegan]),
                    ],
                )],
            },
        },
        Stall {
            vendor: vendor(
                "4",
                "Snack Station",
                "2nd Floor",
                "F2-01",
                "Snacks & Beverages",
                true,
                4.0,
                "5-8 min",
                &["Sandwich", "Tea", "Coffee"],
                &[Veg, Egg, NonVeg],
            ),
            menu: Menu {
                categories: vec![category(
                    "Snacks",
                    vec![
                        MenuItem::new("12", "Grilled Sandwich", 70, "Cheese and vegetable sandwich", true, &[Veg]),
                        MenuItem::new("13", "Masala Tea", 15, "Indian spiced tea", true, &[Veg]),
                        MenuItem::new("14", "Coffee", 20, "Black coffee", true, &[Vegan]),
                    ],
                )],
            },
        },
    ]
}

/// Seed entries keyed by vendor id, as [`ResourceActor::seed`](actor_framework::ResourceActor::seed) takes them.
pub fn seed() -> impl Iterator<Item = (VendorId, Stall)> {
    stalls()
        .into_iter()
        .map(|stall| (stall.vendor.id.clone(), stall))
}

#[allow(clippy::too_many_arguments)]
fn vendor(
    id: &str,
    name: &str,
    floor: &str,
    stall_number: &str,
    category: &str,
    is_open: bool,
    rating: f32,
    preparation_time: &str,
    popular_items: &[&str],
    dietary_options: &[DietaryTag],
) -> Vendor {
    Vendor {
        id: VendorId::from(id),
        name: name.to_string(),
        floor: floor.to_string(),
        stall_number: stall_number.to_string(),
        category: category.to_string(),
        is_open,
        rating,
        preparation_time: preparation_time.to_string(),
        popular_items: popular_items.iter().map(|s| s.to_string()).collect(),
        dietary_options: dietary_options.to_vec(),
    }
}

fn category(name: &str, items: Vec<MenuItem>) -> MenuCategory {
    MenuCategory {
        name: name.to_string(),
        items,
    }
}

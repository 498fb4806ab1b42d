//! Starter catalog loaded into a fresh store.

use shelf_core::entities::Category;

const SEED: [(&str, &str, u32, &str); 9] = [
    (
        "1",
        "Men Clothes",
        125,
        "https://image.hm.com/assets/hm/45/3d/453d85de4980560370364179eb4f8bbf84563ef2.jpg?imwidth=1260",
    ),
    (
        "2",
        "Women Clothes",
        156,
        "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?auto=format&fit=crop&q=80",
    ),
    (
        "3",
        "Accessories",
        73,
        "https://images.unsplash.com/photo-1649972904349-6e44c42644a7?auto=format&fit=crop&q=80",
    ),
    (
        "4",
        "Cotton Clothes",
        65,
        "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?auto=format&fit=crop&q=80",
    ),
    (
        "5",
        "Summer Clothes",
        92,
        "https://images.unsplash.com/photo-1465146344425-f00d5f5c8f07?auto=format&fit=crop&q=80",
    ),
    (
        "6",
        "Wedding Clothes",
        45,
        "https://images.unsplash.com/photo-1500673922987-e212871fec22?auto=format&fit=crop&q=80",
    ),
    (
        "7",
        "Spring Collection",
        78,
        "https://images.unsplash.com/photo-1582562124811-c09040d0a901?auto=format&fit=crop&q=80",
    ),
    (
        "8",
        "Casual Clothes",
        112,
        "https://images.unsplash.com/photo-1649972904349-6e44c42644a7?auto=format&fit=crop&q=80",
    ),
    (
        "9",
        "Hats",
        36,
        "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?auto=format&fit=crop&q=80",
    ),
];

/// The nine starter categories, in display order.
#[must_use]
pub fn seed_catalog() -> Vec<Category> {
    SEED.iter()
        .map(|(id, name, item_count, image)| Category {
            id: (*id).to_string(),
            name: (*name).to_string(),
            item_count: *item_count,
            image: (*image).to_string(),
        })
        .collect()
}

use fitcoach_shared::grocery::Category;

/// Keyword table in precedence order.
///
/// A name is matched when any keyword is a substring of it, and the first
/// category in this list with a match wins. Keep the order stable: several
/// names contain keywords from more than one row ("peanut butter",
/// "chicken broth", "green beans").
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Proteins,
        &[
            "chicken",
            "beef",
            "steak",
            "pork",
            "turkey",
            "lamb",
            "bacon",
            "sausage",
            "mince",
            "duck",
            "venison",
            "salmon",
            "tuna",
            "cod",
            "tilapia",
            "trout",
            "mackerel",
            "sardine",
            "fish",
            "shrimp",
            "prawn",
            "crab",
            "lobster",
            "scallop",
            "egg",
            "tofu",
            "tempeh",
            "seitan",
            "whey",
            "protein powder",
            "peanut butter",
            "almond butter",
        ],
    ),
    (
        Category::Dairy,
        &[
            "milk",
            "cheese",
            "cheddar",
            "mozzarella",
            "parmesan",
            "feta",
            "ricotta",
            "cottage",
            "yogurt",
            "yoghurt",
            "kefir",
            "butter",
            "cream",
            "ghee",
        ],
    ),
    (
        Category::Vegetables,
        &[
            "spinach",
            "kale",
            "lettuce",
            "arugula",
            "broccoli",
            "cauliflower",
            "cabbage",
            "brussels sprout",
            "carrot",
            "celery",
            "cucumber",
            "zucchini",
            "courgette",
            "asparagus",
            "green bean",
            "peas",
            "bell pepper",
            "jalapeno",
            "tomato",
            "onion",
            "shallot",
            "leek",
            "garlic",
            "ginger",
            "mushroom",
            "potato",
            "squash",
            "pumpkin",
            "beet",
            "radish",
            "corn",
            "salad",
            "cilantro",
            "parsley",
            "basil",
        ],
    ),
    (
        Category::Fruits,
        &[
            "apple",
            "banana",
            "berry",
            "berries",
            "orange",
            "lemon",
            "lime",
            "grape",
            "mango",
            "pineapple",
            "peach",
            "pear",
            "plum",
            "apricot",
            "cherry",
            "cherries",
            "kiwi",
            "melon",
            "pomegranate",
            "avocado",
            "fig",
            "raisin",
        ],
    ),
    (
        Category::Grains,
        &[
            "rice",
            "oat",
            "quinoa",
            "bread",
            "toast",
            "pasta",
            "spaghetti",
            "noodle",
            "tortilla",
            "wrap",
            "pita",
            "bagel",
            "couscous",
            "barley",
            "bulgur",
            "farro",
            "buckwheat",
            "wheat",
            "flour",
            "cereal",
            "granola",
            "cracker",
        ],
    ),
    (
        Category::Pantry,
        &[
            "oil",
            "vinegar",
            "salt",
            "pepper",
            "spice",
            "cumin",
            "paprika",
            "cinnamon",
            "oregano",
            "turmeric",
            "vanilla",
            "cocoa",
            "baking",
            "sauce",
            "mustard",
            "ketchup",
            "mayo",
            "salsa",
            "hummus",
            "honey",
            "syrup",
            "sugar",
            "stock",
            "broth",
            "bean",
            "lentil",
            "chickpea",
            "nut",
            "almond",
            "seed",
            "chia",
            "flax",
        ],
    ),
];

/// Grocery category of a normalized ingredient name.
pub fn categorize(normalized: &str) -> Category {
    let name = normalized.to_lowercase();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| name.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

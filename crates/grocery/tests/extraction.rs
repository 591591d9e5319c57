use fitcoach_grocery::extract_items;
use fitcoach_shared::grocery::GroceryListItem;
use fitcoach_shared::nutrition::NutritionPlan;
use serde_json::json;

fn plan(value: serde_json::Value) -> NutritionPlan {
    serde_json::from_value(value).expect("valid plan")
}

fn sample_week() -> NutritionPlan {
    plan(json!({
        "daily_schedule": {
            "monday": {
                "breakfast": {"name": "Eggs & toast", "ingredients": ["2 eggs", "1 slice whole wheat bread", "1/2 avocado"]},
                "lunch": {"name": "Chicken bowl", "ingredients": ["150g chicken breast", "1 cup brown rice", "2 cups spinach (washed)"]},
                "dinner": {"name": "Salmon", "ingredients": ["200g salmon", "1 cup broccoli", "1 tbsp olive oil"]},
                "snacks": [
                    {"name": "Yogurt", "ingredients": ["1 cup greek yogurt", "1/2 cup blueberries"]},
                    null
                ]
            },
            "tuesday": {
                "breakfast": {"ingredients": ["3 eggs", "1/2 tsp salt"]},
                "lunch": null,
                "dinner": {"ingredients": ["150g Chicken Breast", "1 sweet potato"]}
            }
        },
        "shopping_list": {
            "proteins": ["Eggs", "Whey protein"],
            "extras": ["Sparkling water", "x"]
        }
    }))
}

#[test]
fn test_full_week_extraction() {
    let items = extract_items(&sample_week());

    let summary: Vec<(&str, &str)> = items
        .iter()
        .map(|item| (item.category.as_str(), item.name.as_str()))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("dairy", "Greek yogurt"),
            ("extras", "Sparkling water"),
            ("fruits", "Avocado"),
            ("fruits", "Blueberries"),
            ("grains", "Brown rice"),
            ("grains", "Whole wheat bread"),
            ("pantry", "Olive oil"),
            ("pantry", "Salt"),
            ("proteins", "Chicken breast"),
            ("proteins", "Eggs"),
            ("proteins", "Salmon"),
            ("proteins", "Whey protein"),
            ("vegetables", "Broccoli"),
            ("vegetables", "Spinach"),
            ("vegetables", "Sweet potato"),
        ]
    );
}

#[test]
fn test_first_mention_quantity_is_kept() {
    let items = extract_items(&sample_week());

    let eggs = items.iter().find(|item| item.name == "Eggs").unwrap();
    assert_eq!(eggs.quantity.as_deref(), Some("2 eggs"));

    let chicken = items
        .iter()
        .find(|item| item.name == "Chicken breast")
        .unwrap();
    assert_eq!(chicken.quantity.as_deref(), Some("150g chicken breast"));

    let whey = items.iter().find(|item| item.name == "Whey protein").unwrap();
    assert_eq!(whey.quantity, None);
    assert!(items.iter().all(|item| !item.checked));
}

#[test]
fn test_duplicate_eggs_collapse() {
    let items = extract_items(&plan(json!({
        "daily_schedule": {
            "monday": {
                "breakfast": {"ingredients": ["2 eggs"]},
                "dinner": {"ingredients": ["2 eggs"]}
            }
        }
    })));

    assert_eq!(
        items,
        vec![GroceryListItem::new("Eggs", "proteins").with_quantity("2 eggs")]
    );
}

#[test]
fn test_empty_schedule_yields_nothing() {
    assert!(extract_items(&plan(json!({"daily_schedule": {}}))).is_empty());
    assert!(extract_items(&plan(json!({}))).is_empty());
    assert!(extract_items(&plan(json!({"daily_schedule": null}))).is_empty());
    assert!(
        extract_items(&plan(json!({
            "daily_schedule": {"monday": null, "tuesday": {"breakfast": {"name": "Fast"}}}
        })))
        .is_empty()
    );
}

#[test]
fn test_shopping_list_only() {
    let items = extract_items(&plan(json!({
        "shopping_list": {"Produce": ["bananas"], "Dairy": ["Milk"]}
    })));

    assert_eq!(
        items,
        vec![
            GroceryListItem::new("Milk", "Dairy"),
            GroceryListItem::new("Bananas", "Produce"),
        ]
    );
}

#[test]
fn test_schedule_category_wins_over_shopping_list() {
    let items = extract_items(&plan(json!({
        "daily_schedule": {
            "monday": {"lunch": {"ingredients": ["1 cup Broccoli"]}}
        },
        "shopping_list": {"produce": ["broccoli", "BROCCOLI "]}
    })));

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Broccoli");
    assert_eq!(items[0].category, "vegetables");
    assert_eq!(items[0].quantity.as_deref(), Some("1 cup Broccoli"));
}

#[test]
fn test_first_shopping_list_category_wins() {
    let items = extract_items(&plan(json!({
        "shopping_list": {"snacks": ["Almonds"], "pantry": ["almonds"]}
    })));

    assert_eq!(items, vec![GroceryListItem::new("Almonds", "snacks")]);
}

#[test]
fn test_output_is_sorted() {
    let items = extract_items(&sample_week());

    for pair in items.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.category < b.category || (a.category == b.category && a.name <= b.name),
            "{a:?} should come before {b:?}"
        );
    }
}

#[test]
fn test_extraction_is_idempotent() {
    let week = sample_week();

    assert_eq!(extract_items(&week), extract_items(&week));
}

use fitcoach_grocery::{Command, GenerateInput, Query};
use fitcoach_nutrition::CreateInput;
use fitcoach_shared::Error;
use serde_json::json;
use temp_dir::TempDir;

mod helpers;

async fn create_plan(
    state: &fitcoach_shared::State,
    user_id: &str,
    name: Option<&str>,
    plan: serde_json::Value,
) -> anyhow::Result<String> {
    let record = fitcoach_nutrition::Command(state.clone())
        .create(CreateInput {
            user_id: user_id.to_owned(),
            name: name.map(ToOwned::to_owned),
            plan,
        })
        .await?;

    Ok(record.id)
}

fn week_plan() -> serde_json::Value {
    json!({
        "daily_schedule": {
            "monday": {
                "breakfast": {"ingredients": ["2 eggs", "1 cup oats"]},
                "lunch": {"ingredients": ["150g chicken breast", "1 cup broccoli"]},
                "dinner": {"ingredients": ["2 eggs"]}
            }
        },
        "shopping_list": {"pantry": ["Olive oil"]}
    })
}

#[tokio::test]
async fn test_generate_from_plan_id() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let plan_id = create_plan(&state, "user_1", Some("Lean bulk"), week_plan()).await?;
    let command = Command::sqlite(state.clone());

    let list = command
        .generate(GenerateInput {
            user_id: "user_1".to_owned(),
            plan_id: Some(plan_id.to_owned()),
        })
        .await?;

    assert_eq!(list.nutrition_plan_id, plan_id);
    assert_eq!(list.name, "Lean bulk Grocery List");
    assert!(!list.is_completed);

    let names: Vec<&str> = list.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Oats", "Olive oil", "Chicken breast", "Eggs", "Broccoli"]
    );

    let stored = Query::sqlite(state).find("user_1", &list.id).await?.unwrap();
    assert_eq!(stored, list);

    Ok(())
}

#[tokio::test]
async fn test_generate_uses_latest_plan() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    create_plan(&state, "user_1", None, week_plan()).await?;
    let latest = create_plan(
        &state,
        "user_1",
        None,
        json!({"daily_schedule": {"monday": {"lunch": {"ingredients": ["1 banana"]}}}}),
    )
    .await?;

    let list = Command::sqlite(state)
        .generate(GenerateInput {
            user_id: "user_1".to_owned(),
            plan_id: None,
        })
        .await?;

    assert_eq!(list.nutrition_plan_id, latest);
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].name, "Banana");
    assert!(list.name.starts_with("Grocery List - "));

    Ok(())
}

#[tokio::test]
async fn test_generate_errors() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let empty_plan = create_plan(&state, "user_1", None, json!({"daily_schedule": {}})).await?;
    let command = Command::sqlite(state);

    let missing = command
        .generate(GenerateInput {
            user_id: "user_2".to_owned(),
            plan_id: None,
        })
        .await;
    assert!(matches!(missing, Err(Error::NotFound(_))));

    let other_user = command
        .generate(GenerateInput {
            user_id: "user_2".to_owned(),
            plan_id: Some(empty_plan.to_owned()),
        })
        .await;
    assert!(matches!(other_user, Err(Error::NotFound(_))));

    let empty = command
        .generate(GenerateInput {
            user_id: "user_1".to_owned(),
            plan_id: Some(empty_plan),
        })
        .await;
    assert!(matches!(empty, Err(Error::BadRequest(_))));

    let invalid = command
        .generate(GenerateInput {
            user_id: String::new(),
            plan_id: None,
        })
        .await;
    assert!(matches!(invalid, Err(Error::Validate(_))));

    Ok(())
}

#[tokio::test]
async fn test_toggle_complete_reset_delete() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    create_plan(&state, "user_1", None, week_plan()).await?;
    let command = Command::sqlite(state.clone());
    let query = Query::sqlite(state);

    let list = command
        .generate(GenerateInput {
            user_id: "user_1".to_owned(),
            plan_id: None,
        })
        .await?;

    let toggled = command.toggle_item("user_1", &list.id, " eggs ").await?;
    let eggs = toggled.items.iter().find(|i| i.name == "Eggs").unwrap();
    assert!(eggs.checked);

    let missing_item = command.toggle_item("user_1", &list.id, "caviar").await;
    assert!(matches!(missing_item, Err(Error::NotFound(_))));

    let completed = command.set_completed("user_1", &list.id, true).await?;
    assert!(completed.is_completed);

    let stored = query.find("user_1", &list.id).await?.unwrap();
    assert!(stored.is_completed);
    assert!(stored.items.iter().any(|i| i.checked));

    let reset = command.reset("user_1", &list.id).await?;
    assert!(!reset.is_completed);
    assert!(reset.items.iter().all(|i| !i.checked));

    assert!(matches!(
        command.delete("user_2", &list.id).await,
        Err(Error::NotFound(_))
    ));
    command.delete("user_1", &list.id).await?;
    assert!(query.find("user_1", &list.id).await?.is_none());
    assert!(matches!(
        command.toggle_item("user_1", &list.id, "eggs").await,
        Err(Error::NotFound(_))
    ));
    assert!(query.list("user_1").await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_stored_plan_keeps_document_order() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let plan: serde_json::Value = serde_json::from_str(
        r#"{
            "daily_schedule": {
                "monday": {"lunch": {"ingredients": ["2 eggs"]}},
                "friday": {"lunch": {"ingredients": ["6 eggs (large)"]}}
            },
            "shopping_list": {"snacks": ["Almonds"], "pantry": ["almonds"]}
        }"#,
    )?;
    create_plan(&state, "user_1", None, plan).await?;

    let list = Command::sqlite(state)
        .generate(GenerateInput {
            user_id: "user_1".to_owned(),
            plan_id: None,
        })
        .await?;

    let eggs = list.items.iter().find(|i| i.name == "Eggs").unwrap();
    assert_eq!(eggs.quantity.as_deref(), Some("2 eggs"));
    let almonds = list.items.iter().find(|i| i.name == "Almonds").unwrap();
    assert_eq!(almonds.category, "snacks");

    Ok(())
}

#[tokio::test]
async fn test_generate_accepts_free_form_nutrition_values() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    create_plan(
        &state,
        "user_1",
        None,
        json!({
            "daily_schedule": {
                "monday": {
                    "breakfast": {
                        "name": "Oats bowl",
                        "ingredients": ["1 cup oats"],
                        "calories": "450 kcal",
                        "protein": "30g"
                    }
                }
            }
        }),
    )
    .await?;

    let list = Command::sqlite(state)
        .generate(GenerateInput {
            user_id: "user_1".to_owned(),
            plan_id: None,
        })
        .await?;

    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].name, "Oats");

    Ok(())
}

#[tokio::test]
async fn test_concurrent_toggles_are_not_lost() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    create_plan(&state, "user_1", None, week_plan()).await?;
    let command = Command::sqlite(state.clone());

    let list = command
        .generate(GenerateInput {
            user_id: "user_1".to_owned(),
            plan_id: None,
        })
        .await?;

    let mut tasks = tokio::task::JoinSet::new();
    for item in &list.items {
        let command = command.clone();
        let id = list.id.to_owned();
        let name = item.name.to_owned();
        tasks.spawn(async move { command.toggle_item("user_1", &id, &name).await });
    }
    while let Some(result) = tasks.join_next().await {
        result??;
    }

    let stored = Query::sqlite(state).find("user_1", &list.id).await?.unwrap();
    assert_eq!(stored.items.len(), 5);
    assert!(stored.items.iter().all(|i| i.checked));

    Ok(())
}

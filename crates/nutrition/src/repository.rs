use fitcoach_db::table::NutritionPlan;
use fitcoach_shared::nutrition::NutritionPlanRecord;
use sea_query::{Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow, types::Json};

#[derive(FromRow)]
pub struct NutritionPlanRow {
    pub id: String,
    pub user_id: String,
    pub name: Option<String>,
    pub plan: Json<serde_json::Value>,
    pub created_at: i64,
}

impl From<NutritionPlanRow> for NutritionPlanRecord {
    fn from(row: NutritionPlanRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            plan: row.plan.0,
            created_at: row.created_at,
        }
    }
}

pub enum FindType {
    Id(String),
    Latest,
}

fn select_for_user(user_id: String) -> SelectStatement {
    Query::select()
        .columns([
            NutritionPlan::Id,
            NutritionPlan::UserId,
            NutritionPlan::Name,
            NutritionPlan::Plan,
            NutritionPlan::CreatedAt,
        ])
        .from(NutritionPlan::Table)
        .and_where(Expr::col(NutritionPlan::UserId).eq(user_id))
        .order_by(NutritionPlan::CreatedAt, Order::Desc)
        .order_by_expr(Expr::cust("rowid"), Order::Desc)
        .to_owned()
}

pub(crate) async fn find(
    pool: &SqlitePool,
    user_id: String,
    arg_type: FindType,
) -> fitcoach_shared::Result<Option<NutritionPlanRecord>> {
    let mut statement = select_for_user(user_id);
    statement.limit(1);

    if let FindType::Id(id) = arg_type {
        statement.and_where(Expr::col(NutritionPlan::Id).eq(id));
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    let row = sqlx::query_as_with::<_, NutritionPlanRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Into::into))
}

pub(crate) async fn list(
    pool: &SqlitePool,
    user_id: String,
) -> fitcoach_shared::Result<Vec<NutritionPlanRecord>> {
    let statement = select_for_user(user_id);
    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    let rows = sqlx::query_as_with::<_, NutritionPlanRow, _>(&sql, values)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

pub(crate) async fn create(
    pool: &SqlitePool,
    record: &NutritionPlanRecord,
) -> fitcoach_shared::Result<()> {
    let plan = serde_json::to_string(&record.plan)?;
    let statement = Query::insert()
        .into_table(NutritionPlan::Table)
        .columns([
            NutritionPlan::Id,
            NutritionPlan::UserId,
            NutritionPlan::Name,
            NutritionPlan::Plan,
            NutritionPlan::CreatedAt,
        ])
        .values_panic([
            record.id.to_owned().into(),
            record.user_id.to_owned().into(),
            record.name.to_owned().into(),
            plan.into(),
            record.created_at.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

use std::ops::Deref;

use fitcoach_db::table::GroceryList as GroceryListTable;
use fitcoach_shared::grocery::{GroceryList, GroceryListItem};
use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{prelude::FromRow, types::Json};

use crate::store::{GroceryListStore, ListChange};

#[derive(FromRow)]
pub struct GroceryListRow {
    pub id: String,
    pub user_id: String,
    pub nutrition_plan_id: String,
    pub name: String,
    pub items: Json<Vec<GroceryListItem>>,
    pub is_completed: bool,
    pub created_at: i64,
}

impl From<GroceryListRow> for GroceryList {
    fn from(row: GroceryListRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            nutrition_plan_id: row.nutrition_plan_id,
            name: row.name,
            items: row.items.0,
            is_completed: row.is_completed,
            created_at: row.created_at,
        }
    }
}

const COLUMNS: [GroceryListTable; 7] = [
    GroceryListTable::Id,
    GroceryListTable::UserId,
    GroceryListTable::NutritionPlanId,
    GroceryListTable::Name,
    GroceryListTable::Items,
    GroceryListTable::IsCompleted,
    GroceryListTable::CreatedAt,
];

/// SQLite backed grocery list store.
#[derive(Clone)]
pub struct Repository(pub fitcoach_shared::State);

impl Deref for Repository {
    type Target = fitcoach_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait::async_trait]
impl GroceryListStore for Repository {
    async fn create(&self, list: &GroceryList) -> fitcoach_shared::Result<()> {
        let items = serde_json::to_string(&list.items)?;
        let statement = Query::insert()
            .into_table(GroceryListTable::Table)
            .columns(COLUMNS)
            .values_panic([
                list.id.to_owned().into(),
                list.user_id.to_owned().into(),
                list.nutrition_plan_id.to_owned().into(),
                list.name.to_owned().into(),
                items.into(),
                list.is_completed.into(),
                list.created_at.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(())
    }

    async fn find(&self, user_id: &str, id: &str) -> fitcoach_shared::Result<Option<GroceryList>> {
        let statement = Query::select()
            .columns(COLUMNS)
            .from(GroceryListTable::Table)
            .and_where(Expr::col(GroceryListTable::UserId).eq(user_id))
            .and_where(Expr::col(GroceryListTable::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let row = sqlx::query_as_with::<_, GroceryListRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.map(Into::into))
    }

    async fn list_by_user(&self, user_id: &str) -> fitcoach_shared::Result<Vec<GroceryList>> {
        let statement = Query::select()
            .columns(COLUMNS)
            .from(GroceryListTable::Table)
            .and_where(Expr::col(GroceryListTable::UserId).eq(user_id))
            .order_by(GroceryListTable::CreatedAt, Order::Desc)
            .order_by_expr(Expr::cust("rowid"), Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let rows = sqlx::query_as_with::<_, GroceryListRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Runs on the write pool inside a transaction. The write pool holds a
    /// single connection, so concurrent edits of the same list are serialized.
    async fn modify(
        &self,
        user_id: &str,
        id: &str,
        change: ListChange,
    ) -> fitcoach_shared::Result<Option<GroceryList>> {
        let mut tx = self.write_db.begin().await?;

        let statement = Query::select()
            .columns(COLUMNS)
            .from(GroceryListTable::Table)
            .and_where(Expr::col(GroceryListTable::UserId).eq(user_id))
            .and_where(Expr::col(GroceryListTable::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let Some(row) = sqlx::query_as_with::<_, GroceryListRow, _>(&sql, values)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let mut list = GroceryList::from(row);
        if !change(&mut list)? {
            return Ok(Some(list));
        }

        let items = serde_json::to_string(&list.items)?;
        let statement = Query::update()
            .table(GroceryListTable::Table)
            .value(GroceryListTable::Items, items)
            .value(GroceryListTable::IsCompleted, list.is_completed)
            .and_where(Expr::col(GroceryListTable::UserId).eq(user_id))
            .and_where(Expr::col(GroceryListTable::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        if result.rows_affected() != 1 {
            fitcoach_shared::bail!(
                "Grocery list {} update affected {} rows",
                id,
                result.rows_affected()
            );
        }

        tx.commit().await?;

        Ok(Some(list))
    }

    async fn delete(&self, user_id: &str, id: &str) -> fitcoach_shared::Result<bool> {
        let statement = Query::delete()
            .from_table(GroceryListTable::Table)
            .and_where(Expr::col(GroceryListTable::UserId).eq(user_id))
            .and_where(Expr::col(GroceryListTable::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

use serde::Deserialize;

use crate::database::client::Db;

/// Projection a view struct is selected with; record ids are flattened to their numeric key.
pub trait ViewFieldSelector {
    fn get_select_query_fields() -> String;
}

pub async fn record_exists(db: &Db, table_name: &str, id: i64) -> Result<bool, surrealdb::Error> {
    let mut res = db
        .query("RETURN record::exists(type::thing($_table, $id));")
        .bind(("_table", table_name.to_string()))
        .bind(("id", id))
        .await?;
    let res: Option<bool> = res.take(0)?;
    Ok(res.unwrap_or(false))
}

pub async fn get_entity_view<T: for<'a> Deserialize<'a> + ViewFieldSelector>(
    db: &Db,
    table_name: &str,
    id: i64,
) -> Result<Option<T>, surrealdb::Error> {
    let query_string = format!(
        "SELECT {} FROM type::thing($_table, $id);",
        T::get_select_query_fields()
    );
    let mut res = db
        .query(query_string)
        .bind(("_table", table_name.to_string()))
        .bind(("id", id))
        .await?;
    res.take::<Option<T>>(0)
}

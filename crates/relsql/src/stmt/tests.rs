//! Unit tests for statement rendering.

use super::*;
use crate::expr::{Expr, ExprExt, count_all, lit, raw};
use crate::schema::{Column, Table};

fn users() -> Table {
    Table::parse("users", ["id INTEGER PRIMARY KEY", "name TEXT", "age INTEGER"]).unwrap()
}

fn orders() -> Table {
    Table::parse("orders", ["id INTEGER PRIMARY KEY", "user_id INTEGER", "total REAL"]).unwrap()
}

#[test]
fn test_select_defaults_to_all_columns() {
    assert_eq!(users().select().to_sql(), "SELECT\n    *\nFROM\n    users");
}

#[test]
fn test_select_distinct_columns() {
    let users = users();
    let sql = users
        .select_columns([users.col("name").unwrap()])
        .distinct()
        .to_sql();
    assert_eq!(sql, "SELECT DISTINCT\n    name\nFROM\n    users");
}

#[test]
fn test_select_column_replaces_star() {
    let users = users();
    let sql = users
        .select()
        .column(users.col("id").unwrap())
        .column(users.col("name").unwrap())
        .to_sql();
    assert_eq!(sql, "SELECT\n    id, name\nFROM\n    users");
}

#[test]
fn test_empty_projection_falls_back_to_star() {
    let sql = users().select().columns(Vec::<Expr>::new()).to_sql();
    assert_eq!(sql, "SELECT\n    *\nFROM\n    users");
}

#[test]
fn test_where_predicates_combined_with_and() {
    let users = users();
    let sql = users
        .select()
        .and_where(users.column("age").unwrap().gte(18))
        .and_where(users.column("name").unwrap().ne("root"))
        .to_sql();
    assert_eq!(
        sql,
        "SELECT\n    *\nFROM\n    users\nWHERE\n    age >= 18 AND name <> 'root'"
    );
}

#[test]
fn test_join_forces_qualification() {
    let users = users();
    let orders = orders();
    let sql = users
        .select_columns([users.col("name").unwrap(), orders.col("total").unwrap()])
        .inner_join(&orders)
        .on(orders.column("user_id").unwrap().eq(users.column("id").unwrap()))
        .unwrap()
        .and_where(orders.column("total").unwrap().gt(100))
        .to_sql();
    assert_eq!(
        sql,
        "SELECT\n    users.name, orders.total\nFROM\n    users\n\
         INNER JOIN\n    orders\nON\n    orders.user_id = users.id\n\
         WHERE\n    orders.total > 100"
    );
}

#[test]
fn test_plain_join_and_using() {
    let users = users();
    let orders = orders();
    let sql = users
        .select()
        .join(&orders, None)
        .using(["id"])
        .unwrap()
        .to_sql();
    assert_eq!(
        sql,
        "SELECT\n    *\nFROM\n    users\nJOIN\n    orders\nUSING (\n    id\n)"
    );
}

#[test]
fn test_join_kind_keywords() {
    let users = users();
    let orders = orders();
    let cases = [
        (users.select().left_join(&orders), "LEFT JOIN"),
        (users.select().right_join(&orders), "RIGHT JOIN"),
        (users.select().full_join(&orders), "FULL JOIN"),
        (users.select().left_outer_join(&orders), "LEFT OUTER JOIN"),
        (users.select().right_outer_join(&orders), "RIGHT OUTER JOIN"),
        (users.select().full_outer_join(&orders), "FULL OUTER JOIN"),
        (users.select().cross_join(&orders), "CROSS JOIN"),
        (users.select().natural_join(&orders), "NATURAL JOIN"),
    ];
    for (select, keyword) in cases {
        let lines = select.render_lines(&select.scope());
        assert_eq!(lines[4], keyword);
        assert_eq!(lines[5], "    orders");
    }
}

#[test]
fn test_on_without_join_is_misuse() {
    let users = users();
    let err = users
        .select()
        .on(users.column("id").unwrap().eq(1))
        .unwrap_err();
    assert!(err.is_misuse());

    let err = users.select().using(["id"]).unwrap_err();
    assert!(err.is_misuse());
}

#[test]
fn test_on_applies_to_latest_join() {
    let users = users();
    let orders = orders();
    let items = Table::parse("items", ["order_id INTEGER"]).unwrap();
    let sql = users
        .select()
        .inner_join(&orders)
        .on(orders.column("user_id").unwrap().eq(users.column("id").unwrap()))
        .unwrap()
        .left_join(&items)
        .on(items.column("order_id").unwrap().eq(orders.column("id").unwrap()))
        .unwrap()
        .to_sql();
    assert!(sql.ends_with(
        "INNER JOIN\n    orders\nON\n    orders.user_id = users.id\n\
         LEFT JOIN\n    items\nON\n    items.order_id = orders.id"
    ));
}

#[test]
fn test_alias_used_everywhere() {
    let users = users();
    let u = users.alias("u");
    let id = users.column("id").unwrap();
    let name = users.column("name").unwrap();
    let sql = Select::new(u)
        .columns([name.clone()])
        .and_where(id.gt(10))
        .order_by_asc(name)
        .to_sql();
    assert_eq!(
        sql,
        "SELECT\n    u.name\nFROM\n    users AS u\nWHERE\n    u.id > 10\nORDER BY\n    u.name ASC"
    );
    assert!(!sql.contains("users.name"));
}

#[test]
fn test_group_by_having() {
    let orders = orders();
    let user_id = orders.column("user_id").unwrap();
    let orders_count = count_all().alias("orders_count");
    let sql = orders
        .select_columns([Expr::from(user_id.clone()), orders_count.clone().into()])
        .group_by([user_id])
        .having(orders_count.gt(5))
        .to_sql();
    assert_eq!(
        sql,
        "SELECT\n    user_id, COUNT(*) AS orders_count\nFROM\n    orders\n\
         GROUP BY\n    user_id\nHAVING\n    orders_count > 5"
    );
}

#[test]
fn test_order_by_entries() {
    let users = users();
    let age = users.column("age").unwrap();
    let name = users.column("name").unwrap();
    let id = users.column("id").unwrap();
    let sql = users
        .select()
        .order_by(OrderBy::new([age]).desc().nulls(Nulls::Last))
        .order_by(OrderBy::new([name, id]))
        .to_sql();
    assert_eq!(
        sql,
        "SELECT\n    *\nFROM\n    users\nORDER BY\n    age DESC NULLS LAST,\n    name, id"
    );
}

#[test]
fn test_clause_order() {
    let users = users();
    let orders = orders();
    let uid = users.column("id").unwrap();
    let sql = users
        .select_columns([uid.clone()])
        .order_by_desc(uid.clone())
        .having(count_all().gt(1))
        .group_by([uid.clone()])
        .and_where(uid.clone().gt(0))
        .left_join(&orders)
        .on(orders.column("user_id").unwrap().eq(uid))
        .unwrap()
        .to_sql();
    let keywords: Vec<&str> = sql
        .lines()
        .filter(|l| !l.starts_with(' '))
        .collect();
    assert_eq!(
        keywords,
        ["SELECT", "FROM", "LEFT JOIN", "ON", "WHERE", "GROUP BY", "HAVING", "ORDER BY"]
    );
}

#[test]
fn test_branching_from_base() {
    let users = users();
    let id = users.column("id").unwrap();
    let base = users.select();
    let first = base.and_where(id.clone().eq(1));
    let second = base.and_where(id.eq(2));

    let base_sql = base.to_sql();
    assert_eq!(first.to_sql(), format!("{base_sql}\nWHERE\n    id = 1"));
    assert_eq!(second.to_sql(), format!("{base_sql}\nWHERE\n    id = 2"));
    assert_eq!(base.to_sql(), base_sql);
}

#[test]
fn test_insert_from_pairs() {
    let sql = users()
        .insert_values([("name", lit("a")), ("age", lit(30))])
        .to_sql();
    assert_eq!(
        sql,
        "INSERT INTO users (\n    name, age\n)\nVALUES (\n    'a', 30\n)"
    );
}

#[test]
fn test_insert_columns_and_placeholders() {
    let users = users();
    let sql = users
        .insert()
        .columns([users.column("name").unwrap()])
        .values([raw("?")])
        .or_replace()
        .to_sql();
    assert_eq!(
        sql,
        "INSERT OR REPLACE INTO users (\n    name\n)\nVALUES (\n    ?\n)"
    );
}

#[test]
fn test_insert_empty_lists_omitted() {
    assert_eq!(users().insert().to_sql(), "INSERT INTO users");
    let sql = users().insert().values([lit(1), lit("x")]).to_sql();
    assert_eq!(sql, "INSERT INTO users\nVALUES (\n    1, 'x'\n)");
}

#[test]
fn test_insert_set_keeps_lists_parallel() {
    let sql = users().insert().set("name", "b").set("age", 2).to_sql();
    assert_eq!(sql, "INSERT INTO users (\n    name, age\n)\nVALUES (\n    'b', 2\n)");
}

#[test]
fn test_update_set_and_where() {
    let users = users();
    let age = users.column("age").unwrap();
    let sql = users
        .update()
        .set("name", "bob")
        .set(&age, age.clone() + 1)
        .and_where(users.column("id").unwrap().eq(7))
        .to_sql();
    assert_eq!(
        sql,
        "UPDATE\n    users\nSET\n    name = 'bob',\n    age = age + 1\nWHERE\n    id = 7"
    );
}

#[test]
fn test_update_duplicate_set_preserved() {
    let sql = users()
        .update_values([("name", "a"), ("name", "b")])
        .to_sql();
    assert_eq!(sql, "UPDATE\n    users\nSET\n    name = 'a',\n    name = 'b'");
}

#[test]
fn test_delete() {
    let users = users();
    assert_eq!(users.delete().to_sql(), "DELETE FROM\n    users");
    let sql = users
        .delete()
        .and_where(users.column("age").unwrap().lt(13))
        .to_sql();
    assert_eq!(sql, "DELETE FROM\n    users\nWHERE\n    age < 13");
}

#[test]
fn test_create_table() {
    let sql = users().create().to_sql();
    assert_eq!(
        sql,
        "CREATE TABLE users (\n    id INTEGER PRIMARY KEY,\n    name TEXT,\n    age INTEGER\n)"
    );
}

#[test]
fn test_create_table_constraints_and_options() {
    let t = Table::parse("tags", ["post_id INTEGER", "tag TEXT"])
        .unwrap()
        .primary_key(["post_id", "tag"])
        .option("STRICT")
        .option("WITHOUT ROWID");
    assert_eq!(
        t.create().if_not_exists().to_sql(),
        "CREATE TABLE IF NOT EXISTS tags (\n    post_id INTEGER,\n    tag TEXT,\n    \
         PRIMARY KEY (post_id, tag)\n) STRICT, WITHOUT ROWID"
    );
}

#[test]
fn test_drop_table() {
    assert_eq!(users().drop().to_sql(), "DROP TABLE users");
    assert_eq!(users().drop().if_exists().to_sql(), "DROP TABLE IF EXISTS users");
}

#[test]
fn test_alter_table() {
    let users = users();
    assert_eq!(users.rename_to("people").to_sql(), "ALTER TABLE users\nRENAME TO people");
    assert_eq!(
        users
            .add_column(Column::parse("email TEXT NOT NULL DEFAULT ''").unwrap())
            .to_sql(),
        "ALTER TABLE users\nADD COLUMN email TEXT NOT NULL DEFAULT ''"
    );
    assert_eq!(users.drop_column("age").to_sql(), "ALTER TABLE users\nDROP COLUMN age");
}

#[test]
fn test_create_and_drop_index() {
    let users = users();
    let idx = users.index("users_name_age", [users.column("name").unwrap(), users.column("age").unwrap()]);
    assert_eq!(
        idx.create().to_sql(),
        "CREATE INDEX users_name_age\nON users (\n    name, age\n)"
    );
    assert_eq!(
        idx.clone().unique().create().if_not_exists().to_sql(),
        "CREATE UNIQUE INDEX IF NOT EXISTS users_name_age\nON users (\n    name, age\n)"
    );
    assert_eq!(idx.drop().if_exists().to_sql(), "DROP INDEX IF EXISTS users_name_age");
}

#[test]
fn test_statement_metadata() {
    let users = users();
    let select = users.select();
    assert_eq!(select.kind(), StatementKind::Select);
    assert_eq!(select.target().name(), "users");
    assert!(!select.scope().is_qualified());

    let idx = users.index("users_name", ["name"]);
    assert_eq!(idx.create().target().name(), "users_name");
    assert_eq!(idx.drop().kind(), StatementKind::DropIndex);
}

#[test]
fn test_display_matches_render() {
    let select = users().select();
    assert_eq!(select.to_string(), render(&select));
}

use relsql::expr::Predicate;
use relsql::prelude::*;

fn users() -> Table {
    Table::parse("users", ["id INTEGER PRIMARY KEY", "name TEXT"]).unwrap()
}

fn posts() -> Table {
    Table::parse(
        "posts",
        ["id INTEGER PRIMARY KEY", "user_id INTEGER NOT NULL", "title TEXT", "votes INTEGER"],
    )
    .unwrap()
}

#[test]
fn select_where_fixture() {
    let users = users();
    let id = users.column("id").unwrap();
    let sql = users.select().and_where(id.eq(5)).to_sql();
    assert_eq!(sql, "SELECT\n    *\nFROM\n    users\nWHERE\n    id = 5");
    assert_eq!(
        sql.lines().collect::<Vec<_>>(),
        ["SELECT", "    *", "FROM", "    users", "WHERE", "    id = 5"]
    );
}

#[test]
fn insert_from_mapping_keeps_order() {
    let sql = users().insert_values([("name", "a")]).to_sql();
    assert_eq!(sql, "INSERT INTO users (\n    name\n)\nVALUES (\n    'a'\n)");

    let sql = users().insert_values([("name", lit("a")), ("id", lit(1))]).to_sql();
    assert_eq!(sql, "INSERT INTO users (\n    name, id\n)\nVALUES (\n    'a', 1\n)");
}

#[test]
fn single_table_never_qualified() {
    let users = users();
    let id = users.column("id").unwrap();
    let name = users.column("name").unwrap();
    let sql = users
        .select_columns([name.clone()])
        .and_where(id.clone().gt(1))
        .group_by([name.clone()])
        .order_by_asc(id)
        .to_sql();
    assert!(!sql.contains("users."));
}

#[test]
fn join_qualifies_every_clause() {
    let users = users();
    let posts = posts();
    let uid = users.column("id").unwrap();
    let pid = posts.column("user_id").unwrap();
    let votes = posts.column("votes").unwrap();

    let sql = users
        .select_columns([Expr::from(users.column("name").unwrap()), sum(votes.clone()).into()])
        .left_join(&posts)
        .on(pid.eq(uid.clone()))
        .unwrap()
        .and_where(votes.gt(0))
        .group_by([uid.clone()])
        .having(count_all().gt(2))
        .order_by_desc(uid)
        .to_sql();

    assert_eq!(
        sql,
        "SELECT\n    users.name, SUM(posts.votes)\nFROM\n    users\n\
         LEFT JOIN\n    posts\nON\n    posts.user_id = users.id\n\
         WHERE\n    posts.votes > 0\n\
         GROUP BY\n    users.id\n\
         HAVING\n    COUNT(*) > 2\n\
         ORDER BY\n    users.id DESC"
    );
}

#[test]
fn aliases_are_consistent() {
    let users = users();
    let posts = posts();
    let u = users.alias("u");
    let p = posts.alias("p");

    let sql = Select::new(p)
        .columns([posts.col("title").unwrap(), users.col("name").unwrap()])
        .inner_join(u)
        .on(posts.column("user_id").unwrap().eq(users.column("id").unwrap()))
        .unwrap()
        .and_where(users.column("name").unwrap().eq("ann"))
        .to_sql();

    assert_eq!(
        sql,
        "SELECT\n    p.title, u.name\nFROM\n    posts AS p\n\
         INNER JOIN\n    users AS u\nON\n    p.user_id = u.id\n\
         WHERE\n    u.name = 'ann'"
    );
    assert!(!sql.contains("users.") && !sql.contains("posts."));
}

#[test]
fn alias_only_on_one_side() {
    let users = users();
    let posts = posts();
    let sql = Select::new(users.alias("u"))
        .columns([users.col("name").unwrap(), posts.col("title").unwrap()])
        .inner_join(&posts)
        .on(posts.column("user_id").unwrap().eq(users.column("id").unwrap()))
        .unwrap()
        .to_sql();
    assert!(sql.contains("    u.name, posts.title"));
    assert!(sql.contains("posts.user_id = u.id"));
}

#[test]
fn aliased_single_table_forces_qualification() {
    let users = users();
    let sql = Select::new(users.alias("x"))
        .and_where(users.column("id").unwrap().eq(1))
        .to_sql();
    assert!(sql.ends_with("WHERE\n    x.id = 1"));
}

#[test]
fn self_join_keeps_aliases_apart() {
    let employees = Table::parse(
        "employees",
        ["id INTEGER PRIMARY KEY", "name TEXT", "boss INTEGER"],
    )
    .unwrap();
    let a = employees.alias("a");
    let b = employees.alias("b");

    let sql = Select::new(&a)
        .columns([a.column("name").unwrap(), b.column("name").unwrap()])
        .inner_join(&b)
        .on(a.column("boss").unwrap().eq(b.column("id").unwrap()))
        .unwrap()
        .to_sql();

    assert_eq!(
        sql,
        "SELECT\n    a.name, b.name\nFROM\n    employees AS a\n\
         INNER JOIN\n    employees AS b\nON\n    a.boss = b.id"
    );
}

#[test]
fn base_select_is_reusable() {
    let users = users();
    let posts = posts();
    let base = users
        .select_columns([users.col("name").unwrap()])
        .inner_join(&posts)
        .on(posts.column("user_id").unwrap().eq(users.column("id").unwrap()))
        .unwrap();
    let before = base.to_sql();

    let popular = base.and_where(posts.column("votes").unwrap().gt(100));
    let titled = base.and_where(posts.column("title").unwrap().ne(""));

    assert_eq!(base.to_sql(), before);
    assert_eq!(popular.to_sql(), format!("{before}\nWHERE\n    posts.votes > 100"));
    assert_eq!(titled.to_sql(), format!("{before}\nWHERE\n    posts.title <> ''"));
}

#[test]
fn chained_where_on_branch_does_not_leak() {
    let users = users();
    let id = users.column("id").unwrap();
    let base = users.select().and_where(id.clone().gt(0));
    let narrow = base.and_where(id.clone().lt(10));
    assert_eq!(base.to_sql(), "SELECT\n    *\nFROM\n    users\nWHERE\n    id > 0");
    assert_eq!(
        narrow.to_sql(),
        "SELECT\n    *\nFROM\n    users\nWHERE\n    id > 0 AND id < 10"
    );
}

#[test]
fn boolean_groups_parenthesized() {
    let users = users();
    let id = users.column("id").unwrap();
    let name = users.column("name").unwrap();

    let either = or([id.clone().eq(1), id.clone().eq(2)]);
    let sql = users
        .select()
        .and_where(either)
        .and_where(name.clone().ne("bot"))
        .to_sql();
    assert!(sql.ends_with("WHERE\n    (id = 1 OR id = 2) AND name <> 'bot'"));

    let nested = and([
        Predicate::from(and([id.clone().gt(1), id.lt(9)])),
        name.eq("x").into(),
    ]);
    let sql = users.delete().and_where(nested).to_sql();
    assert_eq!(
        sql,
        "DELETE FROM\n    users\nWHERE\n    (id > 1 AND id < 9) AND name = 'x'"
    );
}

#[test]
fn operations_parenthesized_in_operands() {
    let posts = posts();
    let votes = posts.column("votes").unwrap();
    let sql = posts
        .update()
        .set(&votes, (votes.clone() + 1) * 2)
        .and_where((votes.clone() - 1).gte(10))
        .to_sql();
    assert_eq!(
        sql,
        "UPDATE\n    posts\nSET\n    votes = (votes + 1) * 2\nWHERE\n    (votes - 1) >= 10"
    );
}

#[test]
fn numbered_placeholders_in_statement() {
    let users = users();
    let mut params = Params::new(ParamStyle::Numeric);
    let sql = users
        .insert()
        .set("id", params.bind(None).unwrap())
        .set("name", params.bind(None).unwrap())
        .to_sql();
    assert_eq!(sql, "INSERT INTO users (\n    id, name\n)\nVALUES (\n    :1, :2\n)");
    assert_eq!(params.count(), 2);
}

#[test]
fn named_placeholders_reused() {
    let users = users();
    let id = users.column("id").unwrap();
    let mut params = Params::for_style("pyformat").unwrap();
    let sql = users
        .select()
        .and_where(id.clone().gte(params.bind("bound").unwrap()))
        .and_where(id.lte(params.bind("bound").unwrap()))
        .to_sql();
    assert!(sql.ends_with("id >= %(bound)s AND id <= %(bound)s"));
    assert_eq!(params.count(), 2);
    assert_eq!(params.names(), ["bound".to_string()]);
}

#[test]
fn ddl_round_for_table_and_index() {
    let posts = posts().unique(["user_id", "title"]);
    assert_eq!(
        posts.create().to_sql(),
        "CREATE TABLE posts (\n    id INTEGER PRIMARY KEY,\n    user_id INTEGER NOT NULL,\n    \
         title TEXT,\n    votes INTEGER,\n    UNIQUE (user_id, title)\n)"
    );

    let idx = posts.index("posts_votes", ["votes"]);
    assert_eq!(
        render(&idx.create()),
        "CREATE INDEX posts_votes\nON posts (\n    votes\n)"
    );
    assert_eq!(idx.drop().to_sql(), "DROP INDEX posts_votes");
    assert_eq!(posts.drop().if_exists().to_sql(), "DROP TABLE IF EXISTS posts");
}

//! Cross-module tests for query-model construction

use crate::errors::QueryError;
use crate::query::{
    JoinType, OrderBy, QueryColumn, QueryCondition, QueryTable, QueryWrapper, SqlConnector,
};
use serde_json::json;

// ========================================
// FROM registration and dedup
// ========================================

#[test]
fn test_from_dedup_keeps_first_registration() {
    let query = QueryWrapper::create()
        .from(QueryTable::named("users").with_alias("u"))
        .from("users")
        .from(QueryTable::named("users").with_alias("other"));

    assert_eq!(query.tables().len(), 1);
    assert_eq!(query.tables()[0].alias(), Some("u"));
}

#[test]
fn test_from_allows_distinct_tables() {
    let query = QueryWrapper::create().from("users").from("orders");

    assert_eq!(query.tables().len(), 2);
    assert_eq!(query.tables()[0].name(), Some("users"));
    assert_eq!(query.tables()[1].name(), Some("orders"));
}

#[test]
fn test_derived_table_never_dedups_against_named() {
    let inner = QueryWrapper::create().from("users");
    let query = QueryWrapper::create()
        .from("users")
        .from(inner.clone())
        .from(inner);

    // one named + two distinct derived registrations
    assert_eq!(query.tables().len(), 3);
}

// ========================================
// Alias guard
// ========================================

#[test]
fn test_alias_requires_exactly_one_table() {
    let err = QueryWrapper::create().alias("u").unwrap_err();
    assert_eq!(err, QueryError::NoTable);

    let err = QueryWrapper::create()
        .from("users")
        .from("orders")
        .alias("u")
        .unwrap_err();
    assert_eq!(err, QueryError::MultipleTables(2));
}

#[test]
fn test_alias_sets_single_table_alias() {
    let query = QueryWrapper::create().from("users").alias("u").unwrap();
    assert_eq!(query.tables()[0].alias(), Some("u"));
}

// ========================================
// Predicate composition
// ========================================

#[test]
fn test_where_replaces_root() {
    let query = QueryWrapper::create()
        .where_clause(QueryColumn::new("a").eq(1))
        .where_clause(QueryColumn::new("b").eq(2));

    match query.where_condition() {
        Some(QueryCondition::Predicate { column, .. }) => assert_eq!(column.name(), "b"),
        other => panic!("expected single predicate root, got {:?}", other),
    }
    assert_eq!(query.value_array(), vec![json!(2)]);
}

#[test]
fn test_and_or_compose_left_associatively() {
    // where(A).and(B).or(C) must mean (A AND B) OR C
    let query = QueryWrapper::create()
        .where_clause(QueryColumn::new("a").eq(1))
        .and(QueryColumn::new("b").eq(2))
        .or(QueryColumn::new("c").eq(3));

    match query.where_condition() {
        Some(QueryCondition::Composite {
            left, connector, right,
        }) => {
            assert_eq!(*connector, SqlConnector::Or);
            assert!(matches!(
                **left,
                QueryCondition::Composite {
                    connector: SqlConnector::And,
                    ..
                }
            ));
            assert!(matches!(**right, QueryCondition::Predicate { .. }));
        }
        other => panic!("expected composite root, got {:?}", other),
    }
}

#[test]
fn test_and_on_empty_tree_becomes_root() {
    let query = QueryWrapper::create().and(QueryColumn::new("a").eq(1));
    assert!(matches!(
        query.where_condition(),
        Some(QueryCondition::Predicate { .. })
    ));

    let query = QueryWrapper::create().or(QueryColumn::new("a").eq(1));
    assert!(matches!(
        query.where_condition(),
        Some(QueryCondition::Predicate { .. })
    ));
}

#[test]
fn test_raw_sql_conditions() {
    let query = QueryWrapper::create()
        .from("users")
        .where_clause("age > 18")
        .and(QueryCondition::raw_with_params(
            "name LIKE ?",
            vec![json!("%smith%")],
        ));

    assert_eq!(query.value_array(), vec![json!("%smith%")]);
}

#[test]
fn test_where_all_pairs_and_combined_in_iteration_order() {
    let query = QueryWrapper::create().from("users").where_all(vec![
        ("name", json!("kim")),
        ("status", json!("active")),
        ("age", json!(30)),
    ]);

    assert_eq!(
        query.value_array(),
        vec![json!("kim"), json!("active"), json!(30)]
    );
}

#[test]
fn test_having_is_always_and_combined() {
    let query = QueryWrapper::create()
        .from("orders")
        .group_by(QueryColumn::new("user_id"))
        .having(QueryCondition::raw_with_params("COUNT(*) > ?", vec![json!(5)]))
        .having(QueryCondition::raw_with_params("SUM(total) > ?", vec![json!(100)]));

    match query.having_condition() {
        Some(QueryCondition::Composite { connector, .. }) => {
            assert_eq!(*connector, SqlConnector::And);
        }
        other => panic!("expected composite having root, got {:?}", other),
    }
    assert_eq!(query.value_array(), vec![json!(5), json!(100)]);
}

// ========================================
// Parameter extraction ordering
// ========================================

#[test]
fn test_value_array_orders_where_before_having() {
    // having attached first; extraction order must still be [w1, w2, h1]
    let query = QueryWrapper::create()
        .from("orders")
        .having(QueryCondition::raw_with_params("COUNT(*) > ?", vec![json!(3)]))
        .where_clause(QueryColumn::new("status").eq("paid"))
        .and(QueryColumn::new("region").eq("eu"));

    assert_eq!(
        query.value_array(),
        vec![json!("paid"), json!("eu"), json!(3)]
    );
}

#[test]
fn test_value_array_excludes_join_parameters() {
    let query = QueryWrapper::create()
        .from("users")
        .left_join("orders")
        .on(QueryCondition::raw_with_params(
            "orders.total > ?",
            vec![json!(100)],
        ))
        .where_clause(QueryColumn::new("status").eq("active"));

    // join ON parameters come from the per-join primitive, not value_array
    assert_eq!(query.value_array(), vec![json!("active")]);
    assert_eq!(query.joins()[0].parameter_values(), vec![json!(100)]);
}

// ========================================
// Joins
// ========================================

#[test]
fn test_join_kinds_and_on_attachment() {
    let query = QueryWrapper::create()
        .from("users")
        .left_join("orders")
        .on("orders.user_id = users.id")
        .inner_join("payments")
        .on("payments.order_id = orders.id");

    assert_eq!(query.joins().len(), 2);
    assert_eq!(query.joins()[0].join_type(), JoinType::Left);
    assert_eq!(query.joins()[1].join_type(), JoinType::Inner);
    assert!(query.joins()[0].condition().is_some());
    assert_eq!(query.join_tables().len(), 2);
}

#[test]
fn test_inactive_join_is_retained_but_inert() {
    let query = QueryWrapper::create()
        .from("users")
        .left_join_if("orders", false)
        .on(QueryCondition::raw_with_params(
            "orders.total > ?",
            vec![json!(100)],
        ));

    let join = &query.joins()[0];
    assert!(!join.is_active());
    assert!(join.condition().is_some());
    assert!(join.parameter_values().is_empty());
    assert!(query.value_array().is_empty());
}

#[test]
fn test_join_table_registration_dedups() {
    let query = QueryWrapper::create()
        .from("users")
        .left_join("orders")
        .on("orders.user_id = users.id")
        .inner_join("orders")
        .on("orders.user_id = users.id");

    // both join records kept, table registered once
    assert_eq!(query.joins().len(), 2);
    assert_eq!(query.join_tables().len(), 1);
}

#[test]
fn test_join_against_derived_table() {
    let recent = QueryWrapper::create()
        .from("orders")
        .where_clause(QueryColumn::new("created_at").gt("2024-01-01"));

    let query = QueryWrapper::create()
        .from("users")
        .left_join(QueryTable::derived(recent).with_alias("recent"))
        .on("recent.user_id = users.id");

    let join = &query.joins()[0];
    assert_eq!(join.table().alias(), Some("recent"));
    let inner = join.table().derived_query().expect("derived join table");
    assert_eq!(inner.value_array(), vec![json!("2024-01-01")]);
}

// ========================================
// Grouping, ordering, pagination
// ========================================

#[test]
fn test_group_by_preserves_call_order_without_dedup() {
    let query = QueryWrapper::create()
        .from("orders")
        .group_by(QueryColumn::new("region"))
        .group_by_all(["status", "region"]);

    let names: Vec<&str> = query.group_by_columns().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["region", "status", "region"]);
}

#[test]
fn test_order_by_entries_in_call_order() {
    let query = QueryWrapper::create()
        .from("users")
        .order_by(OrderBy::desc("created_at"))
        .order_by("LENGTH(name) ASC");

    assert_eq!(query.order_by_entries().len(), 2);
    assert!(matches!(query.order_by_entries()[1], OrderBy::Raw(_)));
}

#[test]
fn test_limit_offset_last_write_wins() {
    let query = QueryWrapper::create().from("users").limit(10).limit(20);
    assert_eq!(query.limit_rows(), Some(20));

    let query = QueryWrapper::create().from("users").limit(10).limit(None);
    assert_eq!(query.limit_rows(), None);
}

#[test]
fn test_limit_with_offset_equivalent_to_separate_calls() {
    let combined = QueryWrapper::create().from("users").limit_with_offset(5, 10);
    let separate = QueryWrapper::create().from("users").offset(5).limit(10);

    assert_eq!(combined.limit_offset(), separate.limit_offset());
    assert_eq!(combined.limit_rows(), separate.limit_rows());
}

// ========================================
// Nested query models
// ========================================

#[test]
fn test_nested_query_as_from_source() {
    let inner = QueryWrapper::create()
        .from("orders")
        .where_clause(QueryColumn::new("status").eq("paid"))
        .group_by(QueryColumn::new("user_id"));

    let outer = QueryWrapper::create()
        .from(inner)
        .where_clause(QueryColumn::new("total").gt(100));

    assert_eq!(outer.tables().len(), 1);
    let inner_ref = outer.tables()[0].derived_query().expect("derived table");
    assert_eq!(inner_ref.value_array(), vec![json!("paid")]);
    // outer parameters are independent of the nested model's
    assert_eq!(outer.value_array(), vec![json!(100)]);
}

// ========================================
// Miscellaneous model state
// ========================================

#[test]
fn test_select_columns_and_datasource() {
    let query = QueryWrapper::create()
        .select(QueryColumn::new("id"))
        .select_columns(["name", "email"])
        .from("users")
        .datasource("replica");

    assert_eq!(query.selected_columns().len(), 3);
    assert_eq!(query.datasource_name(), Some("replica"));
}

#[test]
fn test_empty_model_defaults() {
    let query = QueryWrapper::default();

    assert!(query.selected_columns().is_empty());
    assert!(query.tables().is_empty());
    assert!(query.joins().is_empty());
    assert!(query.where_condition().is_none());
    assert!(query.having_condition().is_none());
    assert!(query.value_array().is_empty());
    assert_eq!(query.limit_rows(), None);
    assert_eq!(query.limit_offset(), None);
    assert_eq!(query.datasource_name(), None);
}

#[test]
fn test_method_chaining_order_independence() {
    let a = QueryWrapper::create()
        .from("users")
        .where_clause(QueryColumn::new("status").eq("active"))
        .limit(10)
        .order_by(OrderBy::asc("name"));

    let b = QueryWrapper::create()
        .limit(10)
        .order_by(OrderBy::asc("name"))
        .from("users")
        .where_clause(QueryColumn::new("status").eq("active"));

    assert_eq!(a, b);
}

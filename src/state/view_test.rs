use super::*;

fn state(xp: f64, click_value: f64, upgrade_cost: f64, stage: u32) -> GameState {
    GameState { xp, click_value, upgrade_cost, stage }
}

// =============================================================
// format_number
// =============================================================

#[test]
fn integral_numbers_render_without_fraction() {
    assert_eq!(format_number(10.0), "10");
    assert_eq!(format_number(1250.0), "1250");
}

#[test]
fn fractional_numbers_keep_fraction() {
    assert_eq!(format_number(2.5), "2.5");
}

#[test]
fn zero_and_negative_zero_render_as_zero() {
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(-0.0), "0");
}

// =============================================================
// monster_src
// =============================================================

#[test]
fn monster_src_encodes_stage_and_timestamp() {
    assert_eq!(monster_src("/static", 3, 1_700_000_000_123), "/static/stage3.png?t=1700000000123");
}

#[test]
fn monster_src_trims_trailing_slash() {
    assert_eq!(monster_src("/assets/", 1, 5), "/assets/stage1.png?t=5");
}

// =============================================================
// GameView
// =============================================================

#[test]
fn equal_xp_and_cost_enables_upgrade() {
    let view = GameView::new(&state(10.0, 2.0, 10.0, 1), "/static", 42);
    assert_eq!(view.xp, "10");
    assert_eq!(view.click_value, "2");
    assert_eq!(view.upgrade_cost, "10");
    assert!(!view.upgrade_disabled);
    assert!(view.monster_src.contains("stage1"));
}

#[test]
fn xp_below_cost_disables_upgrade() {
    let view = GameView::new(&state(5.0, 1.0, 10.0, 1), "/static", 42);
    assert!(view.upgrade_disabled);
}

#[test]
fn upgrade_flag_follows_strict_comparison_across_values() {
    let cases = [(0.0, 0.0), (0.0, 10.0), (9.0, 10.0), (10.0, 10.0), (11.0, 10.0), (250.0, 1250.0), (1250.0, 1250.0)];
    for (xp, cost) in cases {
        let view = GameView::new(&state(xp, 1.0, cost, 1), "/static", 0);
        assert_eq!(view.upgrade_disabled, xp < cost, "xp={xp} cost={cost}");
    }
}

#[test]
fn same_state_and_time_produce_same_view() {
    let s = state(7.0, 2.0, 50.0, 2);
    assert_eq!(GameView::new(&s, "/static", 99), GameView::new(&s, "/static", 99));
}

#[test]
fn later_time_changes_only_cache_buster() {
    let s = state(7.0, 2.0, 50.0, 2);
    let early = GameView::new(&s, "/static", 1);
    let late = GameView::new(&s, "/static", 2);
    assert_eq!(early.xp, late.xp);
    assert_eq!(early.upgrade_disabled, late.upgrade_disabled);
    assert_eq!(early.monster_src, "/static/stage2.png?t=1");
    assert_eq!(late.monster_src, "/static/stage2.png?t=2");
}

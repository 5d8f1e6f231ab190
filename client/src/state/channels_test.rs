use super::*;
use proptest::prelude::*;

const ANN: ChannelUniverse = ChannelUniverse::Announcement;
const ALERT: ChannelUniverse = ChannelUniverse::Alert;

// =============================================================
// Flag values
// =============================================================

#[test]
fn flag_bits_are_powers_of_two() {
    assert_eq!(Channel::App.bit(), 1);
    assert_eq!(Channel::Sms.bit(), 2);
    assert_eq!(Channel::Email.bit(), 4);
    assert_eq!(Channel::WhatsApp.bit(), 8);
}

#[test]
fn all_is_or_of_universe() {
    assert_eq!(ChannelSet::all(ANN).bits(), 15);
    assert_eq!(ChannelSet::all(ALERT).bits(), 7);
}

#[test]
fn none_is_zero() {
    assert!(ChannelSet::none(ANN).is_empty());
    assert_eq!(ChannelSet::none(ALERT).bits(), 0);
}

// =============================================================
// Toggle scenarios
// =============================================================

#[test]
fn toggle_app_then_sms_then_untoggle_app() {
    let mut set = ChannelSet::none(ANN);
    set.toggle(Channel::App);
    set.toggle(Channel::Sms);
    assert_eq!(set.bits(), 3);
    set.toggle(Channel::App);
    assert_eq!(set.bits(), 2);
}

#[test]
fn whatsapp_toggle_is_ignored_for_alerts() {
    let set = ChannelSet::only(Channel::App, ALERT).toggled(Channel::WhatsApp);
    assert_eq!(set.bits(), 1);
    assert!(!set.contains(Channel::WhatsApp));
}

// =============================================================
// Unknown bits
// =============================================================

#[test]
fn from_raw_drops_unknown_bits() {
    assert_eq!(ChannelSet::from_raw(0b1_0011, ANN).bits(), 3);
    assert_eq!(ChannelSet::from_raw(15, ALERT).bits(), 7);
}

#[test]
fn from_raw_negative_is_none() {
    assert_eq!(ChannelSet::from_raw(-1, ANN).bits(), 0);
}

#[test]
fn toggle_never_reintroduces_unknown_bits() {
    let set = ChannelSet::from_raw(0xF0 | 4, ANN).toggled(Channel::App);
    assert_eq!(set.bits(), 5);
}

// =============================================================
// Serde
// =============================================================

#[test]
fn serializes_as_integer() {
    let set = ChannelSet::from_raw(5, ANN);
    assert_eq!(serde_json::to_value(set).unwrap(), serde_json::json!(5));
}

#[test]
fn deserializes_from_integer_and_names() {
    let n: ChannelSet = serde_json::from_value(serde_json::json!(9)).unwrap();
    assert_eq!(n.bits(), 9);
    let todos: ChannelSet = serde_json::from_value(serde_json::json!("Todos")).unwrap();
    assert_eq!(todos.bits(), 15);
    let list: ChannelSet = serde_json::from_value(serde_json::json!("App, Correo")).unwrap();
    assert_eq!(list.bits(), 5);
}

#[test]
fn describe_lists_labels_in_order() {
    let set = ChannelSet::from_raw(13, ANN);
    assert_eq!(set.describe(), "App, Correo, WhatsApp");
    assert_eq!(ChannelSet::none(ALERT).describe(), "—");
}

// =============================================================
// Properties
// =============================================================

fn any_channel() -> impl Strategy<Value = Channel> {
    prop_oneof![
        Just(Channel::App),
        Just(Channel::Sms),
        Just(Channel::Email),
        Just(Channel::WhatsApp),
    ]
}

proptest! {
    #[test]
    fn toggling_twice_is_identity(raw in any::<i64>(), c in any_channel()) {
        let set = ChannelSet::from_raw(raw, ANN);
        prop_assert_eq!(set.toggled(c).toggled(c), set);
    }

    #[test]
    fn toggle_flips_only_the_target_flag(raw in any::<i64>(), c in any_channel()) {
        let before = ChannelSet::from_raw(raw, ANN);
        let after = before.toggled(c);
        for g in ANN.channels() {
            if *g == c {
                prop_assert_eq!(after.contains(*g), !before.contains(*g));
            } else {
                prop_assert_eq!(after.contains(*g), before.contains(*g));
            }
        }
    }

    #[test]
    fn value_stays_within_universe(raw in any::<i64>(), c in any_channel()) {
        let set = ChannelSet::from_raw(raw, ALERT).toggled(c);
        prop_assert!(set.bits() <= ALERT.mask());
    }
}

//! End-to-end scenarios for a reference deployment: the admin receives the
//! full 10,000,000 supply, moves tokens around, and delegates spending.

use seven_ledger::{Ledger, LedgerError, LedgerEvent, TokenConfig};

fn deploy() -> Ledger {
    Ledger::initialize(TokenConfig {
        name: "Seven".into(),
        symbol: "7".into(),
        standard: "Seven Token v.Alpha".into(),
        admin: "acct-0".into(),
        total_supply: 10_000_000,
    })
    .expect("reference config is valid")
}

#[test]
fn deployment_sets_metadata_and_allocates_supply() {
    let ledger = deploy();
    assert_eq!(ledger.name(), "Seven");
    assert_eq!(ledger.symbol(), "7");
    assert_eq!(ledger.standard(), "Seven Token v.Alpha");
    assert_eq!(ledger.total_supply(), 10_000_000);
    assert_eq!(ledger.balance_of("acct-0"), 10_000_000);
    assert_eq!(ledger.balance_of("acct-1"), 0);
}

#[test]
fn deployment_from_manifest_json() {
    let config = TokenConfig::from_json(
        r#"{
            "name": "Seven",
            "symbol": "7",
            "standard": "Seven Token v.Alpha",
            "admin": "acct-0",
            "total_supply": 10000000
        }"#,
    )
    .unwrap();
    let ledger = Ledger::initialize(config).unwrap();
    assert_eq!(ledger.balance_of("acct-0"), 10_000_000);
}

#[test]
fn ownership_transfer_scenario() {
    let mut ledger = deploy();

    // Larger than the whole supply: rejected, nothing moves.
    assert!(matches!(
        ledger.transfer("acct-0", "acct-1", 9_999_999_999_999),
        Err(LedgerError::InsufficientBalance { .. })
    ));
    assert_eq!(ledger.balance_of("acct-0"), 10_000_000);

    ledger.transfer("acct-0", "acct-1", 2_500_000).unwrap();
    assert_eq!(
        ledger.events(),
        &[LedgerEvent::Transfer {
            from: "acct-0".into(),
            to: "acct-1".into(),
            value: 2_500_000,
        }]
    );
    assert_eq!(ledger.balance_of("acct-1"), 2_500_000);
    assert_eq!(ledger.balance_of("acct-0"), 7_500_000);
}

#[test]
fn approval_scenario() {
    let mut ledger = deploy();
    ledger.approve("acct-0", "acct-1", 1_000).unwrap();
    assert_eq!(
        ledger.events(),
        &[LedgerEvent::Approval {
            owner: "acct-0".into(),
            spender: "acct-1".into(),
            value: 1_000,
        }]
    );
    assert_eq!(ledger.allowance("acct-0", "acct-1"), 1_000);
}

#[test]
fn delegated_transfer_scenario() {
    let mut ledger = deploy();
    let owner = "acct-2";
    let dest = "acct-3";
    let spender = "acct-4";

    ledger.transfer("acct-0", owner, 1_000).unwrap();
    ledger.approve(owner, spender, 100).unwrap();

    // Larger than the owner's balance.
    assert!(matches!(
        ledger.transfer_from(spender, owner, dest, 99_999),
        Err(LedgerError::InsufficientBalance { .. })
    ));
    // Within balance but larger than the approved amount.
    assert!(matches!(
        ledger.transfer_from(spender, owner, dest, 200),
        Err(LedgerError::InsufficientAllowance { .. })
    ));

    let events_before = ledger.events().len();
    ledger.transfer_from(spender, owner, dest, 100).unwrap();
    assert_eq!(ledger.events().len(), events_before + 1);
    assert_eq!(
        ledger.events().last().unwrap(),
        &LedgerEvent::Transfer {
            from: owner.into(),
            to: dest.into(),
            value: 100,
        }
    );
    assert_eq!(ledger.balance_of(owner), 900);
    assert_eq!(ledger.balance_of(dest), 100);
    assert_eq!(ledger.allowance(owner, spender), 0);

    // The allowance is exhausted; one more unit is too much.
    assert!(matches!(
        ledger.transfer_from(spender, owner, dest, 1),
        Err(LedgerError::InsufficientAllowance { .. })
    ));
    assert_eq!(ledger.balance_of(owner), 900);
    assert_eq!(ledger.balance_of(dest), 100);
}

use std::collections::HashMap;
use std::thread;

use tutorials::{
    Artifact, ArtifactKind, AssetError, AssetRegistry, FUNGIBLE_TOKENS_TUTORIAL,
    HELLO_WORLD_TUTORIAL, NON_FUNGIBLE_TOKENS_TUTORIAL, Tutorials,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn every_artifact_resolves() {
    init_logging();
    let tutorials = Tutorials::embedded();
    for artifact in Artifact::ALL {
        let content = tutorials
            .try_artifact(artifact)
            .unwrap_or_else(|e| panic!("{} is not embedded: {}", artifact, e));
        assert!(!content.is_empty(), "{} is empty", artifact);
    }
}

#[test]
fn hello_world_matches_source_file() {
    assert_eq!(
        &tutorials::hello_world()[..],
        include_bytes!("../../../cadence/01-hello-world/contracts/HelloWorld.cdc")
    );
    assert_eq!(
        &tutorials::hello_world_resource()[..],
        include_bytes!("../../../cadence/01-hello-world/contracts/HelloWorldResource.cdc")
    );
    assert_ne!(tutorials::hello_world(), tutorials::hello_world_resource());
}

#[test]
fn token_contracts_match_source_files() {
    assert_eq!(
        &tutorials::fungible_token()[..],
        include_bytes!("../../../cadence/02-fungible-tokens/contracts/FungibleToken.cdc")
    );
    assert_eq!(
        &tutorials::non_fungible_token()[..],
        include_bytes!("../../../cadence/03-non-fungible-tokens/contracts/NonFungibleToken.cdc")
    );
}

#[test]
fn accessors_are_idempotent() {
    let first = tutorials::hello_world();
    let second = tutorials::hello_world();
    assert_eq!(first, second);
    // Both are views of the same embedded bytes.
    assert_eq!(first.as_ptr(), second.as_ptr());
}

#[test]
fn missing_key_fails_instead_of_returning_empty() {
    let registry = AssetRegistry::embedded();
    assert!(matches!(
        registry.get("nonexistent.cdc"),
        Err(AssetError::MissingAsset(ref k)) if k == "nonexistent.cdc"
    ));
    let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        registry.must_get("nonexistent.cdc")
    }));
    assert!(caught.is_err());
}

#[test]
fn lists_tutorial_transactions_and_scripts() {
    let tutorials = Tutorials::embedded();
    assert_eq!(
        tutorials.transactions(FUNGIBLE_TOKENS_TUTORIAL),
        vec![
            "tx_01_create_capability",
            "tx_02_configure_account",
            "tx_03_mint_and_deposit_tokens",
        ]
    );
    assert_eq!(
        tutorials.scripts(NON_FUNGIBLE_TOKENS_TUTORIAL),
        vec!["script_01_print_nfts"]
    );
    for name in tutorials.transactions(HELLO_WORLD_TUTORIAL) {
        assert!(tutorials.transaction(HELLO_WORLD_TUTORIAL, name).is_ok());
    }
}

#[test]
fn rewrites_transaction_imports() -> anyhow::Result<()> {
    let tutorials = Tutorials::embedded();
    let addresses = HashMap::from([("FungibleToken".to_string(), "ee82856bf20e2aa6")]);
    let code = tutorials.code_with_imports(
        FUNGIBLE_TOKENS_TUTORIAL,
        ArtifactKind::Transaction,
        "tx_01_create_capability",
        &addresses,
    )?;
    assert!(code.starts_with("import FungibleToken from 0xee82856bf20e2aa6\n"));
    assert!(!code.contains("import FungibleToken from 0x01"));
    Ok(())
}

#[test]
fn concurrent_lookups_share_the_registry() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(tutorials::hello_world))
        .collect();
    let expected = tutorials::hello_world();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn root_prefixes_list_every_key() {
    let registry = AssetRegistry::embedded();
    let all = registry.list("");
    assert_eq!(all.len(), registry.len());
    assert_eq!(registry.list("./"), all);
    assert_eq!(registry.list("."), all);
}

#[test]
fn rewrites_placeholder_accounts_in_transactions() -> anyhow::Result<()> {
    let tutorials = Tutorials::embedded();
    let addresses = HashMap::from([("FungibleToken".to_string(), "0xee82856bf20e2aa6")]);
    let replacements =
        HashMap::from([("getAccount(0x02)".to_string(), "getAccount(0x01cf0e2f2f715450)")]);
    let code = tutorials.code_with_replacements(
        FUNGIBLE_TOKENS_TUTORIAL,
        ArtifactKind::Transaction,
        "tx_03_mint_and_deposit_tokens",
        &addresses,
        &replacements,
    )?;
    assert!(code.starts_with("import FungibleToken from 0xee82856bf20e2aa6\n"));
    assert!(code.contains("getAccount(0x01cf0e2f2f715450)"));
    assert!(!code.contains("getAccount(0x02)"));
    Ok(())
}

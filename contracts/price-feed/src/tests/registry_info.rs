#![cfg(test)]
extern crate std;

use crate::storage::DataKey;
use crate::tests::sut::{create_registry_contract, init_registry, pair, Sut};
use crate::*;
use soroban_sdk::vec;

#[test]
fn should_return_decimals_and_version() {
    let env = Env::default();

    let registry = create_registry_contract(&env);

    assert_eq!(registry.decimals(), 8);
    assert_eq!(registry.version(), 1);
}

#[test]
fn should_list_pairs_once_in_first_update_order() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_registry(&env);
    let names = ["BTC/USDT", "APT/USDT", "BTC/USDT", "ETH/USDT", "APT/USDT"];

    for name in names {
        sut.registry
            .update_price_feed(&sut.admin, &pair(&env, name), &1, &1);
    }

    assert_eq!(
        sut.registry.pairs(),
        vec![
            &env,
            pair(&env, "BTC/USDT"),
            pair(&env, "APT/USDT"),
            pair(&env, "ETH/USDT")
        ]
    );
    assert_eq!(sut.registry.update_count(), names.len() as u64);
}

#[test]
fn should_keep_pair_index_out_of_instance_storage() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_registry(&env);
    let apt_usdt = pair(&env, "APT/USDT");

    sut.registry
        .update_price_feed(&sut.admin, &apt_usdt, &691_830_196, &10_000);

    env.as_contract(&sut.registry.address, || {
        assert!(!env.storage().instance().has(&DataKey::PairAt(0)));
        assert_eq!(
            env.storage()
                .persistent()
                .get::<DataKey, String>(&DataKey::PairAt(0)),
            Some(apt_usdt.clone())
        );
        assert_eq!(
            env.storage()
                .instance()
                .get::<DataKey, u32>(&DataKey::PairCount),
            Some(1)
        );
    });
}

#[test]
fn should_not_grow_read_cost_with_pair_count() {
    let env = Env::default();
    env.mock_all_auths();
    env.budget().reset_unlimited();

    let sut = init_registry(&env);
    let apt_usdt = pair(&env, "APT/USDT");

    sut.registry
        .update_price_feed(&sut.admin, &apt_usdt, &691_830_196, &10_000);
    let (cpu_single, memory_single) = get_price_cost(&env, &sut, &apt_usdt);

    for i in 0..300 {
        let name = std::format!("PAIR{}/USDT", i);
        sut.registry
            .update_price_feed(&sut.admin, &pair(&env, &name), &1, &1);
    }
    let (cpu_many, memory_many) = get_price_cost(&env, &sut, &apt_usdt);

    assert_eq!(sut.registry.pairs().len(), 301);
    assert!(
        cpu_many < 2 * cpu_single,
        "cpu grew from {} to {}",
        cpu_single,
        cpu_many
    );
    assert!(
        memory_many < 2 * memory_single,
        "memory grew from {} to {}",
        memory_single,
        memory_many
    );
}

fn get_price_cost(env: &Env, sut: &Sut, pair: &String) -> (u64, u64) {
    env.budget().reset_unlimited();

    sut.registry.get_price(pair);

    (
        env.budget().cpu_instruction_cost(),
        env.budget().memory_bytes_cost(),
    )
}

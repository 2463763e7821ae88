//! Rankr - Binary Entry Point
//!
//! Plays one scripted round end to end and prints the receipt. Serves as a
//! quick smoke check that the crate builds and the lifecycle works.

use rankr::types::amount::from_wei;
use rankr::{GameEvent, RoundLedger, Vault};

fn main() {
    println!("===========================================");
    println!("  Rankr - ranking game engine");
    println!("===========================================");
    println!();

    let mut game = RoundLedger::default();
    let fee = game.entry_fee();
    println!(
        "Config: {} items, {} players, entry fee {} ETH",
        game.num_items(),
        game.max_players(),
        from_wei(fee)
    );
    println!();

    println!("Collecting items...");
    game.add_item("Daft Punk", "One More Time", "https://song.link/omt", 10, 0)
        .expect("valid item");
    game.add_item("Justice", "D.A.N.C.E.", "https://song.link/dance", 11, 1)
        .expect("valid item");
    game.add_item("Moderat", "A New Error", "https://song.link/ane", 12, 2)
        .expect("valid item");
    println!("  phase is now {:?}", game.phase());
    println!();

    let mut vault = Vault::new();
    vault.fund(1, fee);
    vault.fund(2, fee);

    println!("Collecting rankings...");
    game.submit_ranking(&mut vault, &[0, 1, 2], fee, 1, 100)
        .expect("valid ranking");
    let receipt = game
        .submit_ranking(&mut vault, &[1, 0, 2], fee, 2, 200)
        .expect("valid ranking")
        .expect("quota reached");

    for event in game.drain_events() {
        match event {
            GameEvent::ItemAdded { title, index, .. } => {
                println!("  ItemAdded       #{index}: {title}");
            }
            GameEvent::RankingSubmitted { player, order } => {
                println!("  RankingSubmitted player {player}: {order:?}");
            }
            GameEvent::RoundCompleted {
                winners,
                reward_per_winner,
            } => {
                println!(
                    "  RoundCompleted  winners {winners:?}, {} ETH each",
                    from_wei(reward_per_winner)
                );
            }
            GameEvent::RoundReset => println!("  RoundReset"),
        }
    }
    println!();

    println!("Receipt for round {}:", receipt.round_id);
    println!("  players:        {}", receipt.players);
    println!("  winners:        {}", receipt.winners);
    println!("  pool:           {} ETH", from_wei(receipt.pool()));
    println!("  reward/winner:  {} ETH", from_wei(receipt.reward_per_winner()));
    println!("  consensus root: {}", receipt.consensus_root_hex());
    println!();

    match ssz_rs::serialize(&receipt) {
        Ok(bytes) => println!("Receipt serializes to {} bytes (SSZ)", bytes.len()),
        Err(e) => println!("ERROR: failed to serialize receipt: {e:?}"),
    }

    println!();
    println!("Winner balance: {} ETH", from_wei(vault.balance_of(1)));
    println!("Loser balance:  {} ETH", from_wei(vault.balance_of(2)));
}

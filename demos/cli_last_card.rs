//! Hot-seat CLI example: two players share one terminal.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use lastcard::{Card, Game, GameOptions, GameStatus, GameView, PlayerId, Rank, Suit};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    println!("Last Card CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new("local".into(), GameOptions::default(), seed);

    let names = [prompt_name("Player 1"), prompt_name("Player 2")];
    for name in &names {
        if let Err(err) = game.add_player(name.clone()) {
            println!("Join error: {err}");
            return;
        }
    }
    if let Err(err) = game.start() {
        println!("Start error: {err}");
        return;
    }

    while game.status() == GameStatus::Playing {
        let Some(player) = game.current_player() else {
            break;
        };
        let Some(view) = game.game_state_for_player(&player) else {
            break;
        };

        print_view(&player, &view);
        let action = prompt_line("Play [index], [d]raw, [p]ass: ");

        match action.as_str() {
            "q" | "quit" => return,
            "d" | "draw" => match game.draw_card(&player) {
                Ok(drawn) if drawn.is_empty() => println!("Nothing left to draw."),
                Ok(drawn) => println!("Drew {}", format_cards(&drawn)),
                Err(err) => println!("Draw error: {err}"),
            },
            "p" | "pass" => {
                if let Err(err) = game.pass(&player) {
                    println!("Pass error: {err}");
                }
            }
            input => {
                let Some(card) = input
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| view.your_hand.get(index).copied())
                else {
                    println!("Unknown action.");
                    continue;
                };

                let chosen_suit = if card.rank == Rank::Eight {
                    prompt_suit()
                } else {
                    None
                };

                if let Err(err) = game.play_card(&player, card, chosen_suit) {
                    println!("Play error: {err}");
                }
            }
        }
    }

    for (player, view) in game.views() {
        if view.your_hand.is_empty() {
            println!("\n{player} wins!");
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_name(seat: &str) -> PlayerId {
    let name = prompt_line(&format!("{seat} name: "));
    if name.is_empty() {
        PlayerId::from(seat)
    } else {
        PlayerId::from(name)
    }
}

fn prompt_suit() -> Option<Suit> {
    match prompt_line("Suit to follow ([h]earts, [d]iamonds, [c]lubs, [s]pades): ").as_str() {
        "h" | "hearts" => Some(Suit::Hearts),
        "d" | "diamonds" => Some(Suit::Diamonds),
        "c" | "clubs" => Some(Suit::Clubs),
        "s" | "spades" => Some(Suit::Spades),
        _ => None,
    }
}

fn print_view(player: &PlayerId, view: &GameView) {
    println!("\n=== {player} ===");
    match view.top_card {
        Some(card) => println!("Top card: {}", format_card(&card)),
        None => println!("Top card: (none)"),
    }
    if let Some(suit) = view.suit_override {
        println!("Suit to follow: {}", colorize(suit_symbol(suit).0, suit_symbol(suit).1));
    }
    if view.draw_penalty > 0 {
        println!("Draw penalty: {} (play a King or draw)", view.draw_penalty);
    }
    println!("Opponent holds {} card(s)", view.opponent_card_count);

    for (index, card) in view.your_hand.iter().enumerate() {
        println!("  [{index}] {}", format_card(card));
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

const fn suit_symbol(suit: Suit) -> (&'static str, &'static str) {
    match suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = suit_symbol(card.suit);

    let rank = match card.rank {
        Rank::Ace => "A",
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
    };

    let colored_rank = if card.rank.is_special() {
        colorize(rank, "1")
    } else {
        rank.to_string()
    };
    format!("{colored_rank}{}", colorize(suit, color_code))
}

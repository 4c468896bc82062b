
use std::convert::TryInto;
use std::path::PathBuf;
use std::time::Instant;

use structopt::StructOpt;

use wordgrid::{Grid, Placement, Premium, Rack, SolutionBuilder, Trie, WILD_LETTER};

#[derive(Debug, serde::Deserialize)]
struct Settings {
    /// The dictionary of words that are allowed to be played, one word per line
    dictionary: PathBuf,

    /// A JSON file holding the board to play on, not present means a fresh
    /// standard board
    board: Option<PathBuf>,

    /// The letters held, stars standing for blanks
    rack: String,

    /// The number of top results shown, not present means all results are shown
    n_shown: Option<usize>,

    /// Print the scored placements as JSON instead of the listing
    #[serde(default)]
    json: bool,
}

#[derive(Debug, StructOpt)]
#[structopt(name = "best_move", about = "Rank every legal move for a rack of letters")]
struct Opt {
    /// The config file holding the settings below
    #[structopt(short = "c", long = "config")]
    config: Option<String>,

    /// The dictionary of words that are allowed to be played, one word per line
    #[structopt(short = "d", long = "dictionary")]
    dict: Option<String>,

    /// A JSON file holding the board to play on
    #[structopt(short = "b", long = "board")]
    board: Option<String>,

    /// The letters held, stars standing for blanks
    #[structopt(short = "r", long = "rack")]
    rack: Option<String>,

    /// The number of top results shown
    #[structopt(short = "n", long = "number-shown")]
    n_shown: Option<usize>,

    /// Print the scored placements as JSON instead of the listing
    #[structopt(long = "json")]
    json: bool,
}

fn load_config(opt: Opt) -> Result<Settings, config::ConfigError> {
    let mut s = config::Config::new();

    if let Some(f) = opt.config {
        s.merge(config::File::with_name(&f))?;
    }

    s.merge(config::Environment::new())?;

    if let Some(d) = opt.dict {
        s.set("dictionary", d)?;
    }
    if let Some(b) = opt.board {
        s.set("board", b)?;
    }
    if let Some(r) = opt.rack {
        s.set("rack", r)?;
    }
    if let Some(n) = opt.n_shown {
        s.set::<i64>("n_shown", n.try_into().unwrap())?;
    }
    if opt.json {
        s.set("json", true)?;
    }

    s.try_into()
}

fn main() {
    simple_logger::SimpleLogger::from_env().init().unwrap();

    let opt = Opt::from_args();
    let conf = load_config(opt).expect("config");

    let start = Instant::now();
    let trie = Trie::load(&conf.dictionary).expect("loading the word list");
    log::info!("dictionary loaded in {:?}", Instant::now() - start);

    let grid: Grid = match conf.board {
        Some(path) => {
            let data = std::fs::read_to_string(path).expect("reading the board file");
            serde_json::from_str(&data).expect("parsing the board file")
        }
        None => Grid::standard(),
    };

    let mut letters = String::new();
    for c in conf.rack.chars() {
        if c.is_ascii_alphabetic() {
            letters.push(c);
        } else if c == '*' {
            letters.push(WILD_LETTER);
        } else {
            log::warn!("a character in the given rack is neither a letter nor a wildcard (*): {}", c);
        }
    }
    let rack = Rack::new(&letters);

    print_grid(&grid);

    let start = Instant::now();
    let placements = SolutionBuilder::new(&grid, &trie).solve(&rack);
    log::info!("{} placements evaluated in {:?}", placements.len(), Instant::now() - start);

    if conf.json {
        println!("{}", serde_json::to_string_pretty(&placements).expect("serializing placements"));
        return;
    }

    let shown = conf.n_shown.unwrap_or_else(|| placements.len());
    let mut last_score = None;
    for scored in placements.iter().rev().take(shown) {
        if last_score == Some(scored.score) {
            print!("{:>3}  ", " ");
        } else {
            last_score = Some(scored.score);
            print!("{:>3}: ", scored.score);
        }
        println!("{}", format_placement(&scored.placement));
    }
}

fn print_grid(grid: &Grid) {
    println!("+{}+", "-".repeat(grid.width()));
    for y in 0..grid.height() {
        let mut row = String::with_capacity(grid.width());
        for x in 0..grid.width() {
            let tile = grid.tile(x, y);
            row.push(match tile.value {
                Some(value) if tile.wild => value.to_ascii_lowercase(),
                Some(value) => value,
                None => match tile.premium {
                    Premium::TripleWord => '=',
                    Premium::DoubleWord => '-',
                    Premium::TripleLetter => '"',
                    Premium::DoubleLetter => '\'',
                    Premium::Start => '*',
                    Premium::Normal => ' ',
                },
            });
        }
        println!("|{}|", row);
    }
    println!("+{}+", "-".repeat(grid.width()));
}

fn format_placement(placement: &Placement) -> String {
    let letters: String = placement
        .letters
        .iter()
        .map(|letter| {
            if letter.wild {
                letter.value.to_ascii_lowercase()
            } else {
                letter.value
            }
        })
        .collect();
    format!(
        "{:>2}-{:<2} {} {}",
        placement.x,
        placement.y,
        if placement.horizontal { "→" } else { "↓" },
        letters,
    )
}

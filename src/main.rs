use clap::{Parser, Subcommand};
use woodpusher::chess::{
    board::Board,
    colour::Colour,
    piece::{Piece, PieceKind},
    render::MoveChart,
    square::Square,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the initial board (DEFAULT)
    Show,
    /// Prints the move chart of a piece standing alone on a square
    Moves {
        /// Piece kind, by name or glyph (e.g. "knight" or "n")
        kind: PieceKind,
        /// Origin square in algebraic notation (e.g. "e4")
        square: Square,
        /// Colour of the piece; affects pawn direction only
        #[arg(short, long, default_value = "white")]
        colour: Colour,
    },
}

pub fn main() {
    let args = Arguments::parse();
    env_logger::init();

    match args.command.unwrap_or(Command::Show) {
        Command::Show => {
            let board = Board::initial();
            log::debug!("initial board holds {} pieces", board.piece_count());
            print!("{board}")
        }
        Command::Moves {
            kind,
            square,
            colour,
        } => {
            let piece = Piece::new(colour, kind, square);
            log::info!(
                "charting moves of the {colour} {} on {square}",
                kind.name()
            );
            print!("{}", MoveChart::new(piece))
        }
    }
}

use nextpieces::game::Game;
use nextpieces::menu;
use nextpieces::piece::PieceGenerator;
use std::io;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game = Game::new(PieceGenerator::new());
    menu::run(&mut game, stdin.lock(), &mut stdout.lock())
}

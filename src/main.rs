use std::error::Error;
use std::time::Duration;
use std::{env, fs};

use vip8::display::MonoTermScreen;
use vip8::input::{CrosstermInput, KeyPoll};
use vip8::machine::Machine;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let path = env::args().nth(1).ok_or("usage: vip8 <program.ch8>")?;
    let image = fs::read(&path)?;

    let mut screen = MonoTermScreen::new(64, 32)?;
    let mut input = CrosstermInput::new()?;
    let mut machine = Machine::new(&mut screen);
    machine.load_program(&image)?;

    loop {
        match input.poll()? {
            KeyPoll::Quit => break,
            KeyPoll::Key(key) => machine.key_pressed(Some(key)),
            KeyPoll::Idle => machine.key_pressed(None),
        }
        machine.run_cycle()?;
        // pace to roughly the 60Hz the timers assume
        spin_sleep::sleep(Duration::from_millis(17));
    }

    // shove some junk on stdout to stop the cli messing up the last frame
    for _ in 0..12 {
        println!();
    }
    Ok(())
}

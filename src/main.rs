use trivia_quiz::TriviaApp;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "משחק טריוויה",
        options,
        Box::new(|_cc| Ok(Box::new(TriviaApp::new()))),
    )
}

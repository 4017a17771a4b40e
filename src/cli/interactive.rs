use std::io::Write;

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    api::AnalysisClient,
    app::{App, View},
    banner,
    form::{ClipboardSource, PlaylistForm, SystemClipboard},
    info,
    loading::LoadingIndicator,
    mood::Mood,
    results::{self, Accordion},
    success, warning,
};

use super::show_results;

enum Flow {
    Continue,
    Quit,
}

/// Session state of the interactive loop.
struct Session<'a, C: ClipboardSource> {
    client: &'a AnalysisClient,
    clipboard: C,
    animate: bool,
    app: App,
    form: PlaylistForm,
    accordion: Accordion,
}

/// Runs the interactive form/results loop until the user quits or stdin closes.
///
/// While the form is shown, a line of text is taken as the playlist link and
/// submitted right away; `:paste` fills the field from the clipboard and an
/// empty line submits the current content. Once results are shown, a mood id
/// or name toggles its section, `:image <mood>` opens the recommendation cover
/// and `:new` returns to the form.
pub async fn interactive(client: &AnalysisClient, animate: bool) {
    let mut session = Session {
        client,
        clipboard: SystemClipboard,
        animate,
        app: App::new(),
        form: PlaylistForm::new(),
        accordion: Accordion::new(),
    };

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    print_form_intro();

    loop {
        prompt(session.app.view());
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warning!("Cannot read input: {}", e);
                break;
            }
        };

        let flow = match session.app.view() {
            View::Results => session.on_results_command(line.trim()),
            View::Form | View::Loading => session.on_form_input(line.trim()).await,
        };

        if let Flow::Quit = flow {
            break;
        }
    }
}

impl<C: ClipboardSource> Session<'_, C> {
    async fn on_form_input(&mut self, line: &str) -> Flow {
        match line {
            ":q" | ":quit" => return Flow::Quit,
            ":help" => {
                print_form_intro();
                return Flow::Continue;
            }
            ":paste" => {
                self.form.paste(&mut self.clipboard);
                match self.form.error() {
                    Some(e) => banner!("{}", e),
                    None => info!("Link: {} (premi Invio per analizzare)", self.form.value()),
                }
                return Flow::Continue;
            }
            "" => {}
            text => self.form.input(text),
        }

        self.submit().await;
        Flow::Continue
    }

    async fn submit(&mut self) {
        let Some(url) = self.form.submit() else {
            if let Some(e) = self.form.error() {
                banner!("{}", e);
            }
            return;
        };

        self.form.set_disabled(true);
        {
            let _loading = LoadingIndicator::mount();
            self.app.submit(self.client, &url).await;
        }
        self.form.set_disabled(false);

        if let Some(result) = self.app.results() {
            self.accordion.collapse();
            success!("Analisi completata");
            show_results(result, self.client.base_url(), self.animate, &self.accordion).await;
            print_results_help();
        } else if let Some(e) = self.app.error() {
            banner!("{}", e);
        }
    }

    fn on_results_command(&mut self, line: &str) -> Flow {
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        match command {
            ":q" | ":quit" => return Flow::Quit,
            ":new" | ":reset" => {
                self.app.reset();
                self.form = PlaylistForm::new();
                self.accordion.collapse();
                print_form_intro();
            }
            ":image" => self.open_image(arg),
            ":help" | "" => print_results_help(),
            other => match Mood::parse(other) {
                Some(mood) => {
                    self.accordion.toggle(mood);
                    if let Some(result) = self.app.results() {
                        print!("{}", results::render_tracks(&result.tracks, &self.accordion));
                    }
                }
                None => warning!("Comando sconosciuto: {}", other),
            },
        }
        Flow::Continue
    }

    fn open_image(&self, arg: &str) {
        let Some(mood) = Mood::parse(arg) else {
            warning!("Indica un mood, ad esempio :image felice");
            return;
        };
        let Some(result) = self.app.results() else {
            return;
        };

        match results::recommendation_image(result, self.client.base_url(), mood) {
            Some(url) => match webbrowser::open(&url) {
                Ok(_) => info!("Apertura copertina: {}", url),
                Err(e) => warning!("Impossibile aprire il browser: {}\n{}", e, url),
            },
            None => warning!("Nessuna copertina per il mood {}", mood),
        }
    }
}

fn prompt(view: View) {
    let marker = match view {
        View::Results => "risultati",
        View::Form | View::Loading => "link",
    };
    print!("{} {} ", marker.dimmed(), ">".bright_blue().bold());
    let _ = std::io::stdout().flush();
}

fn print_form_intro() {
    println!("{}", "Analizza la tua Playlist".bold());
    println!("Inserisci il link della tua playlist Spotify e scopri i mood");
    println!(
        "{}",
        "Incolla il link e premi Invio, oppure :paste per leggerlo dagli appunti (:q per uscire)"
            .dimmed()
    );
}

fn print_results_help() {
    println!();
    println!(
        "{}",
        "0-3 o nome del mood: apri/chiudi la sezione · :image <mood>: copertina · :new: nuova analisi · :q: esci"
            .dimmed()
    );
}

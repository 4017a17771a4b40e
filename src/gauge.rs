//! Animated percentage gauges for the mood distribution.
//!
//! Each gauge counts its readout up from 0 to the target percentage over a
//! fixed window using a cubic ease-in-out curve. Frames are driven by a fixed
//! ticker and every frame recomputes the value from elapsed time, so a late
//! frame never slows the animation down. Dropping a [`Gauge`] cancels its
//! animation; retargeting restarts it from 0.

use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};

use crate::{mood::Mood, types::OverallMood};

pub const ANIMATION_DURATION: Duration = Duration::from_millis(2500);
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Cubic ease-in-out: `4p³` for the first half, `1 - (-2p + 2)³ / 2` for the second.
pub fn ease_in_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    if p < 0.5 {
        4.0 * p * p * p
    } else {
        1.0 - (-2.0 * p + 2.0).powi(3) / 2.0
    }
}

/// Readout of a gauge heading for `target` after `elapsed` of `duration`.
pub fn displayed_percentage(target: u32, elapsed: Duration, duration: Duration) -> u32 {
    let progress = if duration.is_zero() {
        1.0
    } else {
        (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
    };
    (target as f64 * ease_in_out_cubic(progress)).round() as u32
}

/// Whole-number percentage of every mood, in id order. Missing moods count as 0.
pub fn gauge_percentages(overall: &OverallMood) -> [(Mood, u32); 4] {
    Mood::ALL.map(|mood| (mood, (overall.share(mood) * 100.0).round().max(0.0) as u32))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub value: u32,
    pub done: bool,
}

/// One run of the count-up animation.
#[derive(Debug, Clone, Copy)]
pub struct GaugeAnimation {
    target: u32,
    started: Instant,
    duration: Duration,
}

impl GaugeAnimation {
    pub fn new(target: u32, started: Instant, duration: Duration) -> Self {
        Self {
            target,
            started,
            duration,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn frame(&self, now: Instant) -> Frame {
        let elapsed = now.saturating_duration_since(self.started);
        Frame {
            value: displayed_percentage(self.target, elapsed, self.duration),
            done: elapsed >= self.duration,
        }
    }
}

/// A single animated gauge bound to a progress bar.
pub struct Gauge {
    mood: Mood,
    pb: ProgressBar,
    duration: Duration,
    target: u32,
    frames: watch::Receiver<Frame>,
    task: JoinHandle<()>,
}

impl Gauge {
    /// Starts animating `pb` from 0 towards `target`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(mood: Mood, pb: ProgressBar, target: u32, duration: Duration) -> Self {
        pb.set_length(100);
        pb.set_style(gauge_style(mood));
        pb.set_prefix(format!("{} {:<9}", mood.emoji(), mood.name()));

        let (frames, task) = start(pb.clone(), target, duration);
        Self {
            mood,
            pb,
            duration,
            target,
            frames,
            task,
        }
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// The value currently shown by the gauge.
    pub fn displayed(&self) -> u32 {
        self.frames.borrow().value
    }

    /// Cancels the running animation and restarts it from 0 towards `target`.
    pub fn retarget(&mut self, target: u32) {
        self.task.abort();
        self.pb.reset();
        let (frames, task) = start(self.pb.clone(), target, self.duration);
        self.target = target;
        self.frames = frames;
        self.task = task;
    }

    /// Waits until the animation reaches its target.
    pub async fn finished(&mut self) {
        // An aborted animation drops its sender; there is nothing left to wait for.
        let _ = self.frames.wait_for(|frame| frame.done).await;
    }
}

impl Drop for Gauge {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn start(pb: ProgressBar, target: u32, duration: Duration) -> (watch::Receiver<Frame>, JoinHandle<()>) {
    let animation = GaugeAnimation::new(target, Instant::now(), duration);
    let (tx, rx) = watch::channel(Frame {
        value: 0,
        done: false,
    });
    let task = tokio::spawn(animate(animation, pb, tx));
    (rx, task)
}

async fn animate(animation: GaugeAnimation, pb: ProgressBar, tx: watch::Sender<Frame>) {
    let mut ticker = tokio::time::interval(FRAME_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        let frame = animation.frame(Instant::now());
        pb.set_position(frame.value as u64);
        pb.set_message(format!("{}%", frame.value));
        tx.send_replace(frame);

        if frame.done {
            pb.finish();
            break;
        }
    }
}

fn gauge_style(mood: Mood) -> ProgressStyle {
    let template = format!(
        "{{prefix}} {{bar:40.{color}/white.dim}} {{msg:>4}}",
        color = mood.term_color()
    );
    ProgressStyle::with_template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━─")
}

/// The four mood gauges of one analysis.
pub struct MoodGauges {
    _multi: MultiProgress,
    gauges: Vec<Gauge>,
}

impl MoodGauges {
    pub fn mount(overall: &OverallMood, duration: Duration) -> Self {
        Self::with_target(overall, duration, ProgressDrawTarget::stderr())
    }

    pub fn hidden(overall: &OverallMood, duration: Duration) -> Self {
        Self::with_target(overall, duration, ProgressDrawTarget::hidden())
    }

    fn with_target(overall: &OverallMood, duration: Duration, target: ProgressDrawTarget) -> Self {
        let multi = MultiProgress::with_draw_target(target);
        let gauges = gauge_percentages(overall)
            .into_iter()
            .map(|(mood, percentage)| {
                let pb = multi.add(ProgressBar::new(100));
                Gauge::spawn(mood, pb, percentage, duration)
            })
            .collect();

        Self {
            _multi: multi,
            gauges,
        }
    }

    pub fn gauge(&self, mood: Mood) -> Option<&Gauge> {
        self.gauges.iter().find(|g| g.mood() == mood)
    }

    pub fn displayed(&self) -> Vec<(Mood, u32)> {
        self.gauges.iter().map(|g| (g.mood(), g.displayed())).collect()
    }

    pub async fn finished(&mut self) {
        for gauge in self.gauges.iter_mut() {
            gauge.finished().await;
        }
    }
}

//! Pure diffing of player snapshots into element commands.

use crate::library::MediaSource;
use crate::player::{Snapshot, clamp_volume};

/// One command for the playback element.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Load(Option<MediaSource>),
    SetVolume(f32),
    Play,
    Pause,
}

fn needs_load(prev: &Snapshot, next: &Snapshot) -> bool {
    if prev.index != next.index || prev.epoch != next.epoch {
        return true;
    }
    // A playlist mutation only matters if it changed what the current entry plays.
    prev.playlist_rev != next.playlist_rev && prev.source != next.source
}

/// Commands that bring an element reflecting `prev` in line with `next`.
///
/// `prev == None` means the element has never been reconciled. Effects come in
/// element order: source first, then gain, then play intent.
pub fn reconcile(prev: Option<&Snapshot>, next: &Snapshot) -> Vec<Effect> {
    let mut effects = Vec::new();
    let volume = clamp_volume(next.volume);

    let Some(prev) = prev else {
        effects.push(Effect::Load(next.source.clone()));
        effects.push(Effect::SetVolume(volume));
        if next.playing {
            effects.push(Effect::Play);
        }
        return effects;
    };

    let loaded = needs_load(prev, next);
    if loaded {
        effects.push(Effect::Load(next.source.clone()));
    }

    if clamp_volume(prev.volume) != volume {
        effects.push(Effect::SetVolume(volume));
    }

    if loaded {
        // A fresh load is paused; only a playing intent needs a command.
        if next.playing {
            effects.push(Effect::Play);
        }
    } else if prev.playing != next.playing {
        effects.push(if next.playing {
            Effect::Play
        } else {
            Effect::Pause
        });
    }

    effects
}

//! Loaded sound handles, keyed by gameplay cue.

use bevy::prelude::*;
use bevy_kira_audio::AudioSource;

use crate::core::{AudioPaths, MusicCue, SoundCue};

/// Sound effect and music handles. Missing paths stay `None` and play nothing.
#[derive(Resource, Debug, Default, Clone)]
pub struct SoundLibrary {
    pub hit: Option<Handle<AudioSource>>,
    pub eat: Option<Handle<AudioSource>>,
    pub power: Option<Handle<AudioSource>>,
    pub arrival: Option<Handle<AudioSource>>,
    pub shoot: Option<Handle<AudioSource>>,
    pub music: Option<Handle<AudioSource>>,
    pub power_music: Option<Handle<AudioSource>>,
}

impl SoundLibrary {
    /// Start loading every configured clip.
    pub fn load(asset_server: &AssetServer, paths: &AudioPaths) -> Self {
        let load = |path: &Option<String>| {
            path.as_ref()
                .map(|path| asset_server.load::<AudioSource>(path.clone()))
        };

        Self {
            hit: load(&paths.hit),
            eat: load(&paths.eat),
            power: load(&paths.power),
            arrival: load(&paths.arrival),
            shoot: load(&paths.shoot),
            music: load(&paths.music),
            power_music: load(&paths.power_music),
        }
    }

    pub fn clip(&self, cue: SoundCue) -> Option<&Handle<AudioSource>> {
        match cue {
            SoundCue::Hit => self.hit.as_ref(),
            SoundCue::Eat => self.eat.as_ref(),
            SoundCue::Power => self.power.as_ref(),
            SoundCue::Arrival => self.arrival.as_ref(),
            SoundCue::Shoot => self.shoot.as_ref(),
        }
    }

    /// Track to loop after a music request, or `None` for silence.
    pub fn track(&self, cue: MusicCue) -> Option<&Handle<AudioSource>> {
        match cue {
            MusicCue::Normal => self.music.as_ref(),
            MusicCue::Power => self.power_music.as_ref(),
            MusicCue::Stop => None,
        }
    }
}

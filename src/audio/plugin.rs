//! Audio plugin - sound effects and background music through Kira.

use bevy::prelude::*;
use bevy_kira_audio::{Audio, AudioApp, AudioChannel, AudioControl};

use super::library::SoundLibrary;
use crate::core::{GameConfig, GameState, MusicCue, MusicEvent, SoundEvent};

/// Dedicated channel so music can be stopped without cutting sound effects.
#[derive(Resource)]
pub struct MusicChannel;

/// Audio plugin - requires `bevy_kira_audio::AudioPlugin` to be added by the app.
pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_audio_channel::<MusicChannel>()
            .init_resource::<SoundLibrary>()
            .add_systems(Startup, load_sound_library)
            .add_systems(OnEnter(GameState::Playing), request_music(MusicCue::Normal))
            .add_systems(OnEnter(GameState::Lost), request_music(MusicCue::Stop))
            .add_systems(OnEnter(GameState::Won), request_music(MusicCue::Stop))
            .add_systems(Update, (play_sound_effects, switch_music));
    }
}

fn load_sound_library(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<GameConfig>,
) {
    let library = SoundLibrary::load(&asset_server, &config.audio);
    if library.music.is_none() {
        info!("No background music configured");
    }
    commands.insert_resource(library);
}

/// System that sends a fixed music request.
fn request_music(cue: MusicCue) -> impl Fn(EventWriter<MusicEvent>) {
    move |mut music: EventWriter<MusicEvent>| {
        music.send(MusicEvent(cue));
    }
}

fn play_sound_effects(
    mut sounds: EventReader<SoundEvent>,
    library: Res<SoundLibrary>,
    audio: Res<Audio>,
) {
    for SoundEvent(cue) in sounds.read() {
        if let Some(clip) = library.clip(*cue) {
            audio.play(clip.clone());
        }
    }
}

/// Stop whatever is looping and start the requested track, if any.
fn switch_music(
    mut requests: EventReader<MusicEvent>,
    library: Res<SoundLibrary>,
    channel: Res<AudioChannel<MusicChannel>>,
) {
    let Some(MusicEvent(cue)) = requests.read().last().copied() else {
        return;
    };

    channel.stop();
    if let Some(track) = library.track(cue) {
        channel.play(track.clone()).looped();
    }
    debug!("Music switched to {:?}", cue);
}

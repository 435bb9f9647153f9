use crate::config::{PlaylistSettings, SeedTrack};

use super::model::Track;

/// The playlist the player starts with when no config overrides it.
/// Entries carry display labels only; there is nothing to play until files are added.
const DEMO: &[(&str, &str, &str)] = &[
    ("Мёртвый Анархист", "Король и Шут", "3:42"),
    ("Золото мёртвых", "NAGART", "4:18"),
    ("Демобилизация", "Сектор Газа", "3:25"),
    ("Твой звонок", "Сектор Газа", "3:51"),
    ("Лирика", "Сектор Газа", "4:02"),
    ("Камнем по голове", "КиШ", "3:33"),
    ("Охотник", "Король и Шут", "4:15"),
    ("Пиво-Пиво-Пиво", "КняZz", "3:28"),
    ("Лесник", "Король и Шут", "5:44"),
    ("Танец злобного гения", "Король и Шут", "4:21"),
    ("Кукла колдуна", "Король и Шут", "4:07"),
    ("Дагон", "Король и Шут", "3:55"),
    ("Прыгну со скалы", "Король и Шут", "4:33"),
    ("Бомж", "Сектор Газа", "2:58"),
    ("Дурак и молния", "Король и Шут", "4:12"),
    ("Музыка нас связала", "Мираж", "3:47"),
    (
        "Komarovo (DVRST Phonk Remix)",
        "DVRST, Игорь Скляр, Atomic Heart",
        "2:33",
    ),
    ("Всё, что касается", "Звери", "4:28"),
];

pub fn demo_playlist() -> Vec<Track> {
    DEMO.iter()
        .map(|&(title, artist, duration)| Track::new(title, artist, duration))
        .collect()
}

fn from_seed(seed: &SeedTrack) -> Track {
    Track {
        title: seed.title.clone(),
        artist: seed.artist.clone(),
        duration_label: seed.duration.clone(),
        url: seed.url.clone(),
        file: seed.path.clone(),
    }
}

/// Build the startup playlist: the demo list (if enabled) followed by configured seeds.
pub fn initial_playlist(settings: &PlaylistSettings) -> Vec<Track> {
    let mut tracks = if settings.demo_seed {
        demo_playlist()
    } else {
        Vec::new()
    };
    tracks.extend(settings.seed.iter().map(from_seed));
    tracks
}

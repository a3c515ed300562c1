//! Curated call data
//!
//! Hand-collected call entries from public sources (NPS, FrogLife,
//! AmphibiaWeb, CaliforniaHerps, Wikimedia). Species names here come from
//! the source sites and do not always line up with the dataset's canonical
//! names, which is exactly what the matcher is for.

/// A curated call entry referencing a remote recording
#[derive(Debug, Clone, Copy)]
pub struct SeedCall {
    pub species_name: &'static str,
    pub scientific_name: &'static str,
    pub audio_url: &'static str,
    pub description: &'static str,
}

/// A sample recording to download for offline playback
#[derive(Debug, Clone, Copy)]
pub struct SampleDownload {
    pub species_name: &'static str,
    pub scientific_name: &'static str,
    pub url: &'static str,
    pub filename: &'static str,
    pub description: &'static str,
}

pub const CURATED_CALLS: &[SeedCall] = &[
    SeedCall {
        species_name: "American Bullfrog",
        scientific_name: "Lithobates catesbeianus",
        audio_url: "https://www.nps.gov/subjects/sound/upload/American-Bullfrog_NPS.mp3",
        description: "Deep, resonant 'jug-o-rum' calls that carry far across water",
    },
    SeedCall {
        species_name: "Spring Peeper",
        scientific_name: "Pseudacris crucifer",
        audio_url: "https://www.nps.gov/subjects/sound/upload/Spring-Peeper_NPS.mp3",
        description: "High-pitched 'peep' calls that signal the arrival of spring",
    },
    SeedCall {
        species_name: "Green Treefrog",
        scientific_name: "Hyla cinerea",
        audio_url: "https://www.nps.gov/subjects/sound/upload/Green-Treefrog_NPS.mp3",
        description: "Repeated 'queenk-queenk' bell-like calls",
    },
    SeedCall {
        species_name: "Cope's Gray Treefrog",
        scientific_name: "Hyla chrysoscelis",
        audio_url: "https://www.nps.gov/subjects/sound/upload/Copes-Gray-Treefrog_NPS.mp3",
        description: "Musical trill with metallic quality, faster than Gray Treefrog",
    },
    SeedCall {
        species_name: "Western Chorus Frog",
        scientific_name: "Pseudacris triseriata",
        audio_url: "https://www.nps.gov/subjects/sound/upload/Western-Chorus-Frog_NPS.mp3",
        description: "Sound like running a finger along the teeth of a comb",
    },
    SeedCall {
        species_name: "Northern Leopard Frog",
        scientific_name: "Lithobates pipiens",
        audio_url: "https://www.nps.gov/subjects/sound/upload/Northern-Leopard-Frog_NPS.mp3",
        description: "Low, guttural snore followed by several grunting pulses",
    },
    SeedCall {
        species_name: "Wood Frog",
        scientific_name: "Lithobates sylvaticus",
        audio_url: "https://www.nps.gov/subjects/sound/upload/Wood-Frog_NPS.mp3",
        description: "Resembles quacking ducks, short and rapid",
    },
    SeedCall {
        species_name: "Pacific Treefrog",
        scientific_name: "Pseudacris regilla",
        audio_url: "https://www.californiaherps.com/sounds/pseudacrisregillamix3na.mp3",
        description: "The classic 'ribbit' sound heard in many movies",
    },
    SeedCall {
        species_name: "Pickerel Frog",
        scientific_name: "Lithobates palustris",
        audio_url: "https://www.froglife.org/wp-content/uploads/2015/05/Pickerel-Frog.mp3",
        description: "Low-pitched snore lasting 1-2 seconds",
    },
    SeedCall {
        species_name: "Common Frog",
        scientific_name: "Rana temporaria",
        audio_url: "https://www.froglife.org/wp-content/uploads/2015/05/Common-Frog.mp3",
        description: "Series of low-pitched grunts and croaks",
    },
    SeedCall {
        species_name: "American Toad",
        scientific_name: "Anaxyrus americanus",
        audio_url: "https://www.froglife.org/wp-content/uploads/2015/05/American-Toad.mp3",
        description: "Long, musical trills lasting 6-30 seconds",
    },
    SeedCall {
        species_name: "Great Plains Toad",
        scientific_name: "Anaxyrus cognatus",
        audio_url: "https://amphibiaweb.org/sounds/Anaxyrus_cognatus.mp3",
        description: "Harsh, rattling trill like a jackhammer",
    },
    SeedCall {
        species_name: "Natterjack Toad",
        scientific_name: "Epidalea calamita",
        audio_url: "https://www.froglife.org/wp-content/uploads/2015/05/Natterjack-Toad.mp3",
        description: "Loud, rasping calls that can be heard over a kilometer away",
    },
    SeedCall {
        species_name: "Fowler's Toad",
        scientific_name: "Anaxyrus fowleri",
        audio_url: "https://amphibiaweb.org/sounds/Anaxyrus_fowleri.mp3",
        description: "Harsh, nasal 'waaaah' lasting 1-4 seconds",
    },
    SeedCall {
        species_name: "Barking Treefrog",
        scientific_name: "Hyla gratiosa",
        audio_url: "https://amphibiaweb.org/sounds/Hyla_gratiosa.mp3",
        description: "Deep, dog-like barks or honks",
    },
];

pub const SAMPLE_DOWNLOADS: &[SampleDownload] = &[
    SampleDownload {
        species_name: "American Bullfrog",
        scientific_name: "Lithobates catesbeianus",
        url: "https://upload.wikimedia.org/wikipedia/commons/9/9f/Lithobates_catesbeianus.ogg",
        filename: "american_bullfrog.ogg",
        description: "Deep, resonant 'jug-o-rum' calls",
    },
    SampleDownload {
        species_name: "Spring Peeper",
        scientific_name: "Pseudacris crucifer",
        url: "https://upload.wikimedia.org/wikipedia/commons/2/2f/Pseudacris_crucifer_02.mp3",
        filename: "spring_peeper.mp3",
        description: "High-pitched 'peep' calls that signal the arrival of spring",
    },
    SampleDownload {
        species_name: "Green Treefrog",
        scientific_name: "Hyla cinerea",
        url: "https://upload.wikimedia.org/wikipedia/commons/e/e7/Hyla_cinerea.ogg",
        filename: "green_treefrog.ogg",
        description: "Repeated 'queenk-queenk' bell-like calls",
    },
    SampleDownload {
        species_name: "American Toad",
        scientific_name: "Anaxyrus americanus",
        url: "https://upload.wikimedia.org/wikipedia/commons/6/61/Anaxyrus_americanus_-_American_Toad_-_Call.ogg",
        filename: "american_toad.ogg",
        description: "Long musical trill that can last up to 30 seconds",
    },
    SampleDownload {
        species_name: "Gray Treefrog",
        scientific_name: "Hyla versicolor",
        url: "https://upload.wikimedia.org/wikipedia/commons/e/e0/Hyla_versicolor.ogg",
        filename: "gray_treefrog.ogg",
        description: "Melodic bird-like trill that lasts 1-3 seconds",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_urls_are_unique() {
        let mut urls: Vec<&str> = CURATED_CALLS.iter().map(|c| c.audio_url).collect();
        urls.sort_unstable();
        urls.dedup();
        assert_eq!(urls.len(), CURATED_CALLS.len());
    }

    #[test]
    fn test_sample_filenames_are_unique() {
        let mut names: Vec<&str> = SAMPLE_DOWNLOADS.iter().map(|s| s.filename).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SAMPLE_DOWNLOADS.len());
    }

    #[test]
    fn test_scientific_names_have_genus_and_species() {
        for call in CURATED_CALLS {
            assert!(
                call.scientific_name.split_whitespace().count() >= 2,
                "malformed scientific name: {}",
                call.scientific_name
            );
        }
    }
}

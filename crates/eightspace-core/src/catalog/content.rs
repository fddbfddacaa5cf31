//! The Eight Space's checked-in content: images, biographies, exhibitions,
//! posters, and the about/visit copy.

use eightspace_types::artist::Artist;
use eightspace_types::catalog::{AboutSection, Exhibition, ExhibitionPoster, VisitInfo};

pub const LOGO_URL: &str = "https://maddyworks.com/wp-content/uploads/2026/02/8-space.jpg";

pub const THE_LINE: &str = "The Line Starts From Where You Stand";
pub const MOTHER_BROWN: &str = "Mother Brown, Gold Fields, and Wild Honey";

const THE_LINE_POSTER: &str = "https://maddyworks.com/wp-content/uploads/2025/12/The-Line-Starts-From-Where-You-Stand-6-scaled.png";
const MOTHER_BROWN_POSTER: &str =
    "https://maddyworks.com/wp-content/uploads/2026/02/Mother-Brown-Gold-Fields-and-Wild-Honey.png";

pub const PIECE_URLS: &[&str] = &[
    "https://maddyworks.com/wp-content/uploads/2025/12/Rodney-Dickson_5-scaled.jpg",
    "https://maddyworks.com/wp-content/uploads/2025/12/Rodney-Dickson_4-scaled.jpg",
    "https://maddyworks.com/wp-content/uploads/2025/12/Rodney-Dickson_3-scaled.jpg",
    "https://maddyworks.com/wp-content/uploads/2025/12/Rodney-Dickson_2-scaled.jpg",
    "https://maddyworks.com/wp-content/uploads/2025/12/Rodney-Dickson_1-scaled.jpg",
    "https://maddyworks.com/wp-content/uploads/2025/12/Martin-Seck_4-scaled.jpg",
    "https://maddyworks.com/wp-content/uploads/2025/12/Martin-Seck_3-scaled.jpg",
    "https://maddyworks.com/wp-content/uploads/2025/12/Martin-Seck_2-scaled.jpg",
    "https://maddyworks.com/wp-content/uploads/2025/12/Martin-Seck_1-scaled.jpg",
    "https://maddyworks.com/wp-content/uploads/2025/12/Napoles-Marty_1-scaled.jpg",
    "https://maddyworks.com/wp-content/uploads/2025/12/Napoles-Marty_2-scaled.jpg",
    "https://maddyworks.com/wp-content/uploads/2025/12/Napoles-Marty_4-scaled.jpg",
    "https://www.aninditadutta.com/wp-content/uploads/2022/10/Matter_of_Moment_b.jpg",
    "https://www.aninditadutta.com/wp-content/uploads/2022/10/Matter_of_Moment_a.jpg",
    "https://www.aninditadutta.com/wp-content/uploads/2022/10/Maya_2.jpg",
    "https://www.aninditadutta.com/wp-content/uploads/2022/10/Self_Portrait_02.jpg",
    "https://www.aninditadutta.com/wp-content/uploads/2022/10/Self_Portrait_01.jpg",
    "https://www.aninditadutta.com/wp-content/uploads/2022/10/Untitled_Triptych_c.jpg",
    "https://www.aninditadutta.com/wp-content/uploads/2022/10/Untitled_Triptych_b.jpg",
    "https://www.aninditadutta.com/wp-content/uploads/2022/10/Untitled_Triptych_a.jpg",
    "https://www.aninditadutta.com/wp-content/uploads/2022/10/Wrest_in_peace_b1-scaled.jpg",
    "https://www.aninditadutta.com/wp-content/uploads/2022/10/Wrest_in_Peace_c.jpg",
    "https://www.aninditadutta.com/wp-content/uploads/2022/10/Wrest_in_peace_a.jpg",
];

pub fn biography(artist: Artist) -> &'static str {
    match artist {
        Artist::AninditaDutta => {
            "Anindita Dutta is known for her visceral, process-driven performance work often \
             utilizing wet clay. Her practice explores themes of memory, endurance, and the \
             relationship between the body and the earth, documented through powerful video and \
             print media."
        }
        Artist::RodneyDickson => {
            "Painted his 1985 portraits on bedsheets and torn blankets, transforming scarcity into \
             sculptural medium. Growing up in Northern Ireland during the Troubles, his work asks: \
             what beauty can be salvaged?"
        }
        Artist::MartinSeck => {
            "Draws with \"comely lines\" that explode forms into fragments. Born in postwar \
             Germany, his practice returns to earlier gestures, reconnecting across time. \"A line \
             as an opening,\" he says, \"connected through a lifeline.\""
        }
        Artist::NapolesMarty => {
            "Carves and chars wood into sculptural figures while his drawings trace mythic \
             creatures on paper. Trained in Havana's classical tradition, his work embodies \"our \
             deepest myths,\" standing in the threshold where flesh becomes bone."
        }
    }
}

/// Explicit portrait overrides. Artists not listed fall back to their first work.
pub fn portraits() -> Vec<(Artist, &'static str)> {
    // The solo show's poster stands in for a portrait.
    vec![(Artist::AninditaDutta, MOTHER_BROWN_POSTER)]
}

pub fn posters() -> Vec<ExhibitionPoster> {
    vec![
        ExhibitionPoster {
            title: THE_LINE.to_string(),
            url: THE_LINE_POSTER.to_string(),
        },
        ExhibitionPoster {
            title: MOTHER_BROWN.to_string(),
            url: MOTHER_BROWN_POSTER.to_string(),
        },
    ]
}

pub fn exhibitions() -> Vec<Exhibition> {
    vec![
        Exhibition {
            title: THE_LINE.to_string(),
            curator_credit: "Curated by Madhavan Pillai".to_string(),
            artists: vec![Artist::RodneyDickson, Artist::MartinSeck, Artist::NapolesMarty],
            tagline: None,
            description: paragraphs(&[
                "Because all seeing begins with a place to see from. Before the dots and the line \
                 and the form, before the image emerges, there is position. Where you stand \
                 determines what you see, how you see it, and what you perceive it to be. The \
                 artistic process begins with the body in place and the movement of the hand \
                 responding to what the eye perceives as truth.",
                "This relationship between position and perception, between standing and seeing, \
                 is the foundation of this exhibition. Three artists working across sculpture, \
                 painting, drawing, and video reveal that observation is never neutral. Napoles \
                 Marty carves and chars wood into sculptural figures, while his drawings trace the \
                 same mythic creatures on paper, both refusing to stay still between myth and \
                 matter.",
                "Rodney Dickson painted his 1985 portraits on bedsheets, curtains, and torn \
                 blankets because he had no money for canvas. That scarcity became a method. \
                 Martin Seck draws with what he calls \"comely lines\" that explode forms into \
                 fragments. Together, their works form a conversation about how position shapes \
                 vision.",
            ]),
        },
        Exhibition {
            title: MOTHER_BROWN.to_string(),
            curator_credit: "Solo Exhibition".to_string(),
            artists: vec![Artist::AninditaDutta],
            tagline: Some(
                "An Exhibition of Wet Clay Performance Work by Anindita Dutta".to_string(),
            ),
            description: paragraphs(&[
                "In Mother Brown, Gold Fields, and Wild Honey, Anindita Dutta reshapes clay into a \
                 raw, tactile language of earth, body, and memory. Her sculptures and performances \
                 are not passive objects but charged rituals, gestures that awaken wet clay into a \
                 medium of emotional and cultural power. Through her hands, clay becomes a \
                 reflection of life's dualities: strength and fragility, nurture and power, joy \
                 and sorrow. Dutta does not resolve these tensions; she lets them breathe, \
                 creating forms alive with the urgency of human experience.",
                "Clay, for Dutta, is both a witness and co-creator. It holds the echoes of ancient \
                 practices, stories told through generations, and speaks directly to the present. \
                 Her sculptures, shaped from raw, undyed clay, carry the natural pigments of the \
                 land itself. The Indian red of India, the yellows of China, the red ochre of \
                 Japan, the reds and oranges of Mexico, and the diverse clays of America: these \
                 clays, in their myriad hues, anchor her work in the global language of earth.",
                "Dutta's performances deepen this conversation between flesh and soil, body and \
                 earth. Staged in galleries, museums, and public spaces, these acts dissolve \
                 boundaries between humans and the earth. Bodies press into clay, leaving behind \
                 traces; these marks become a living record of endurance, resistance, and renewal. \
                 The clay pushes back, stiffening or crumbling, mirroring what Dutta calls its \
                 \"stubborn kinship with bodies fighting to hold their shape.\" Here, she asks: \
                 where does the self end and the world begin?",
                "The exhibition's title anchors this interplay of intimacy and universality. \
                 \"Mother Brown\" evokes the generative earth, a primal caretaker; \"Gold Fields\" \
                 speaks to histories of labor and wealth, brutal and luminous; \"Wild Honey\" hums \
                 with the untamed sweetness of nature. Together, they map Dutta's journey from \
                 personal memory to shared myth. Her abstracted forms draw inspiration from the \
                 tactile rituals of rural India yet resonate with ancient global traditions where \
                 clay binds communities to land and lineage.",
                "This exhibition invites you to witness clay's silent alchemy. Dutta's art does \
                 not describe change, it ignites it. In her hands, every groove becomes a story of \
                 survival, every dent a testament to defiance. Her work roars a quiet truth: like \
                 clay, we are marked by the pressures of living, yet within us burns the will to \
                 endure, to reshape, to rise.",
            ]),
        },
    ]
}

pub fn about() -> Vec<AboutSection> {
    vec![
        AboutSection {
            heading: None,
            paragraphs: paragraphs(&[
                "The Eight Space is a platform for rethinking how art is displayed and \
                 experienced. Located at 50 Elm Street in New Haven, Connecticut, we transform \
                 exhibition-making itself into a creative practice attending to display \
                 structures, spatial decisions, and the conditions under which art comes to life.",
            ]),
        },
        AboutSection {
            heading: Some("What We Believe".to_string()),
            paragraphs: paragraphs(&[
                "Exhibition-making is an art form in itself.",
                "While studios are where experimentation happens within artistic production, and \
                 residencies allow exploration through process and duration, most galleries \
                 simply present finished experimental works.",
                "The Eight Space focuses on experimentation in presentation itself.",
                "We hold multiple perspectives at once. We move past linear ideas of space and \
                 time. We connect different disciplines, practices, and communities. We expand \
                 beyond traditional gallery models because the way we encounter art shapes what \
                 art can become.",
            ]),
        },
        AboutSection {
            heading: Some("Our Approach".to_string()),
            paragraphs: paragraphs(&[
                "Nestled within Mitchell Studio at 50 Elm Street, The Eight Space exists \
                 alongside active artistic practice. This embedded model creates flexibility, \
                 immediacy, and ongoing conversation between production and presentation.",
                "We curate both exhibitions and the act of curating itself, treating spatial \
                 decisions and presentation strategies as central materials. Every show is an \
                 opportunity to question: How does space shape meaning? What happens when \
                 duration becomes part of the work? How can exhibition structures themselves \
                 become acts of creative thinking?",
                "We support site-responsive installations, time-based and evolving exhibitions, \
                 participatory formats, minimal or altered display strategies, and \
                 cross-disciplinary presentations involving performance, sound, text, and \
                 architecture.",
            ]),
        },
        AboutSection {
            heading: Some("Our Place in New Haven".to_string()),
            paragraphs: paragraphs(&[
                "New Haven provides a unique environment for this work shaped by Yale \
                 University's intellectual culture, a dense network of cultural institutions, and \
                 an intimate scale that supports genuine local engagement.",
                "The Eight Space works as a connecting point: between academic discourse and \
                 independent practice, between experimental art and public access, between \
                 established institutions and emerging voices.",
                "We're here because New Haven needed a venue devoted entirely to alternative \
                 exhibition formats. A place where the question isn't just what to show, but how \
                 showing happens at all.",
            ]),
        },
    ]
}

pub fn visit() -> VisitInfo {
    VisitInfo {
        venue: "The Eight Space".to_string(),
        address_lines: vec!["50 Elm Street".to_string(), "New Haven, Connecticut".to_string()],
        opening_hours: "By appointment during the exhibition period.".to_string(),
        accessibility: "The Eight Space is committed to ensuring that our exhibitions are \
                        accessible to all visitors. Our physical space is wheelchair accessible."
            .to_string(),
    }
}

fn paragraphs(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

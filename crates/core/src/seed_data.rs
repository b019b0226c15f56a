//! The fixed sample catalog loaded into a sparse database.
//!
//! Authors and genres are matched by exact name, books by title, so loading
//! the dataset twice never duplicates anything.

/// Seeding runs only while the catalog holds fewer books than this.
pub const SEED_THRESHOLD: i64 = 5;

/// Whether a catalog with `book_count` books should receive the sample data.
pub fn should_seed(book_count: i64) -> bool {
    book_count < SEED_THRESHOLD
}

pub const AUTHORS: [&str; 15] = [
    "Fyodor Dostoevsky",
    "Leo Tolstoy",
    "Anton Chekhov",
    "Alexander Pushkin",
    "Mikhail Lermontov",
    "Nikolai Gogol",
    "Ivan Turgenev",
    "Aleksandr Solzhenitsyn",
    "Mikhail Bulgakov",
    "Vladimir Nabokov",
    "Ivan Bunin",
    "Maxim Gorky",
    "Alexander Ostrovsky",
    "Ray Bradbury",
    "Agatha Christie",
];

pub const GENRES: [&str; 10] = [
    "Novel",
    "Classic",
    "Drama",
    "Poetry",
    "Science Fiction",
    "Detective",
    "Historical",
    "Adventure",
    "Non-fiction",
    "Biography",
];

/// One row of the sample book table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedBook {
    pub title: &'static str,
    pub author: &'static str,
    pub genre: &'static str,
    pub year: i32,
    pub annotation: &'static str,
    pub review: &'static str,
}

pub const BOOKS: [SeedBook; 20] = [
    SeedBook {
        title: "Crime and Punishment",
        author: "Fyodor Dostoevsky",
        genre: "Novel",
        year: 1866,
        annotation: "A novel about the student Rodion Raskolnikov, who commits a crime.",
        review: "A deep psychological novel exploring morality and repentance.",
    },
    SeedBook {
        title: "The Brothers Karamazov",
        author: "Fyodor Dostoevsky",
        genre: "Novel",
        year: 1880,
        annotation: "Dostoevsky's final novel, concerned with faith and morality.",
        review: "A philosophical novel probing the nature of man.",
    },
    SeedBook {
        title: "The Idiot",
        author: "Fyodor Dostoevsky",
        genre: "Novel",
        year: 1869,
        annotation: "A novel about Prince Myshkin, a kind and naive man.",
        review: "A moving story of a pure soul in a cruel world.",
    },
    SeedBook {
        title: "War and Peace",
        author: "Leo Tolstoy",
        genre: "Historical",
        year: 1869,
        annotation: "An epic of Russian society during the wars with Napoleon.",
        review: "A monumental work spanning the fates of many characters.",
    },
    SeedBook {
        title: "Anna Karenina",
        author: "Leo Tolstoy",
        genre: "Novel",
        year: 1877,
        annotation: "The tragic love story of the married Anna Karenina.",
        review: "A classic of world literature about love, betrayal and society.",
    },
    SeedBook {
        title: "Resurrection",
        author: "Leo Tolstoy",
        genre: "Novel",
        year: 1899,
        annotation: "Tolstoy's last novel, about moral rebirth.",
        review: "A powerful work about repentance and redemption.",
    },
    SeedBook {
        title: "The Cherry Orchard",
        author: "Anton Chekhov",
        genre: "Drama",
        year: 1904,
        annotation: "A play about a noble family forced to sell its cherry orchard.",
        review: "A subtle drama about a changing era and a vanishing way of life.",
    },
    SeedBook {
        title: "Three Sisters",
        author: "Anton Chekhov",
        genre: "Drama",
        year: 1901,
        annotation: "A play about three sisters who dream of Moscow.",
        review: "A profound piece about unfulfilled dreams and hopes.",
    },
    SeedBook {
        title: "Eugene Onegin",
        author: "Alexander Pushkin",
        genre: "Poetry",
        year: 1833,
        annotation: "A novel in verse, a classic of Russian literature.",
        review: "A brilliant work about love and fate.",
    },
    SeedBook {
        title: "The Captain's Daughter",
        author: "Alexander Pushkin",
        genre: "Historical",
        year: 1836,
        annotation: "A historical novel set during Pugachev's Rebellion.",
        review: "A gripping tale of love and duty against a historical backdrop.",
    },
    SeedBook {
        title: "A Hero of Our Time",
        author: "Mikhail Lermontov",
        genre: "Novel",
        year: 1840,
        annotation: "A psychological novel about the young officer Pechorin.",
        review: "One of the first psychological novels in Russian literature.",
    },
    SeedBook {
        title: "Dead Souls",
        author: "Nikolai Gogol",
        genre: "Novel",
        year: 1842,
        annotation: "The adventures of Chichikov, who buys up 'dead souls'.",
        review: "A satire of Russian society in the first half of the 19th century.",
    },
    SeedBook {
        title: "The Government Inspector",
        author: "Nikolai Gogol",
        genre: "Drama",
        year: 1836,
        annotation: "A comedy about officials who mistake a traveller for an inspector.",
        review: "A sharp satire of bureaucracy and human vice.",
    },
    SeedBook {
        title: "Fathers and Sons",
        author: "Ivan Turgenev",
        genre: "Novel",
        year: 1862,
        annotation: "A novel about the conflict of generations in 19th-century Russia.",
        review: "A landmark work about nihilism and family values.",
    },
    SeedBook {
        title: "The Master and Margarita",
        author: "Mikhail Bulgakov",
        genre: "Science Fiction",
        year: 1967,
        annotation: "The devil pays a visit to 1930s Moscow.",
        review: "A philosophical and mystical novel that became a cult classic.",
    },
    SeedBook {
        title: "Lolita",
        author: "Vladimir Nabokov",
        genre: "Novel",
        year: 1955,
        annotation: "A novel about a man's tragic obsession with a teenage girl.",
        review: "A scandalous and masterfully written novel of forbidden love.",
    },
    SeedBook {
        title: "The Gulag Archipelago",
        author: "Aleksandr Solzhenitsyn",
        genre: "Historical",
        year: 1973,
        annotation: "A literary investigation of the Soviet system of repression.",
        review: "A monumental account of the Stalinist purges.",
    },
    SeedBook {
        title: "The Lower Depths",
        author: "Maxim Gorky",
        genre: "Drama",
        year: 1902,
        annotation: "A play about the inhabitants of a doss house.",
        review: "A social drama about people who have sunk to the bottom of life.",
    },
    SeedBook {
        title: "Fahrenheit 451",
        author: "Ray Bradbury",
        genre: "Science Fiction",
        year: 1953,
        annotation: "A dystopia in which books are banned and burned.",
        review: "A prophetic novel about the value of knowledge and free thought.",
    },
    SeedBook {
        title: "Murder on the Orient Express",
        author: "Agatha Christie",
        genre: "Detective",
        year: 1934,
        annotation: "A detective investigates a murder aboard a train.",
        review: "A brilliant mystery with an unexpected ending.",
    },
];

//! Built-in 1914-2004 dataset.
//!
//! Office holders are the ones serving at the end of each year. Prices are
//! US national averages.

use crate::models::Year;

pub(super) const PRESIDENTS: &[(Year, Year, &str)] = &[
    (1914, 1920, "Woodrow Wilson"),
    (1921, 1922, "Warren G. Harding"),
    (1923, 1928, "Calvin Coolidge"),
    (1929, 1932, "Herbert Hoover"),
    (1933, 1944, "Franklin D. Roosevelt"),
    (1945, 1952, "Harry S. Truman"),
    (1953, 1960, "Dwight D. Eisenhower"),
    (1961, 1962, "John F. Kennedy"),
    (1963, 1968, "Lyndon B. Johnson"),
    (1969, 1973, "Richard Nixon"),
    (1974, 1976, "Gerald Ford"),
    (1977, 1980, "Jimmy Carter"),
    (1981, 1988, "Ronald Reagan"),
    (1989, 1992, "George H. W. Bush"),
    (1993, 2000, "Bill Clinton"),
    (2001, 2004, "George W. Bush"),
];

pub(super) const VICE_PRESIDENTS: &[(Year, Year, &str)] = &[
    (1914, 1920, "Thomas R. Marshall"),
    (1921, 1922, "Calvin Coolidge"),
    (1923, 1924, "Vacant"),
    (1925, 1928, "Charles G. Dawes"),
    (1929, 1932, "Charles Curtis"),
    (1933, 1940, "John Nance Garner"),
    (1941, 1944, "Henry A. Wallace"),
    (1945, 1948, "Vacant"),
    (1949, 1952, "Alben W. Barkley"),
    (1953, 1960, "Richard Nixon"),
    (1961, 1962, "Lyndon B. Johnson"),
    (1963, 1964, "Vacant"),
    (1965, 1968, "Hubert Humphrey"),
    (1969, 1972, "Spiro Agnew"),
    (1973, 1973, "Gerald Ford"),
    (1974, 1976, "Nelson Rockefeller"),
    (1977, 1980, "Walter Mondale"),
    (1981, 1988, "George H. W. Bush"),
    (1989, 1992, "Dan Quayle"),
    (1993, 2000, "Al Gore"),
    (2001, 2004, "Dick Cheney"),
];

/// Decennial census counts, applied to every year of the decade.
pub(super) const POPULATION_BY_DECADE: &[(Year, Year, &str)] = &[
    (1914, 1919, "92,228,496"),
    (1920, 1929, "106,021,537"),
    (1930, 1939, "123,202,624"),
    (1940, 1949, "132,164,569"),
    (1950, 1959, "151,325,798"),
    (1960, 1969, "179,323,175"),
    (1970, 1979, "203,211,926"),
    (1980, 1989, "226,545,805"),
    (1990, 1999, "248,709,873"),
    (2000, 2004, "281,421,906"),
];

pub(super) const GOLD_FIXED_ERA: &[(Year, Year, &str)] =
    &[(1914, 1933, "$20.67"), (1934, 1967, "$35.00")];

pub(super) const GOLD_BY_YEAR: &[(Year, &str)] = &[
    (1968, "$39.31"),
    (1969, "$41.28"),
    (1970, "$36.02"),
    (1971, "$40.62"),
    (1972, "$58.42"),
    (1973, "$97.39"),
    (1974, "$154.00"),
    (1975, "$160.86"),
    (1976, "$124.74"),
    (1977, "$147.84"),
    (1978, "$193.40"),
    (1979, "$306.00"),
    (1980, "$615.00"),
    (1981, "$460.00"),
    (1982, "$376.00"),
    (1983, "$424.00"),
    (1984, "$361.00"),
    (1985, "$317.00"),
    (1986, "$368.00"),
    (1987, "$447.00"),
    (1988, "$437.00"),
    (1989, "$381.00"),
    (1990, "$383.51"),
    (1991, "$362.11"),
    (1992, "$343.82"),
    (1993, "$359.77"),
    (1994, "$384.00"),
    (1995, "$383.79"),
    (1996, "$387.81"),
    (1997, "$331.02"),
    (1998, "$294.24"),
    (1999, "$278.98"),
    (2000, "$279.11"),
    (2001, "$271.04"),
    (2002, "$309.73"),
    (2003, "$363.38"),
    (2004, "$409.72"),
];

pub(super) const SILVER: &[(Year, Year, &str)] = &[
    (1914, 1919, "$0.67"),
    (1920, 1929, "$0.65"),
    (1930, 1939, "$0.40"),
    (1940, 1949, "$0.60"),
    (1950, 1959, "$0.90"),
    (1960, 1964, "$1.05"),
    (1965, 1969, "$1.29"),
    (1970, 1974, "$2.00"),
    (1975, 1979, "$5.00"),
    (1980, 1984, "$11.00"),
    (1985, 1989, "$6.00"),
    (1990, 2004, "$5.00"),
];

pub(super) const GASOLINE_BY_YEAR: &[(Year, &str)] = &[
    (1970, "$0.357"),
    (1971, "$0.364"),
    (1972, "$0.361"),
    (1973, "$0.388"),
    (1974, "$0.532"),
    (1975, "$0.567"),
    (1976, "$0.590"),
    (1977, "$0.622"),
    (1978, "$0.626"),
    (1979, "$0.857"),
    (1980, "$1.221"),
    (1981, "$1.353"),
    (1982, "$1.281"),
    (1983, "$1.225"),
    (1984, "$1.198"),
    (1985, "$1.196"),
    (1986, "$0.931"),
    (1987, "$0.957"),
    (1988, "$0.964"),
    (1989, "$1.060"),
    (1990, "$1.217"),
    (1991, "$1.196"),
    (1992, "$1.190"),
    (1993, "$1.173"),
    (1994, "$1.174"),
    (1995, "$1.205"),
    (1996, "$1.288"),
    (1997, "$1.291"),
    (1998, "$1.115"),
    (1999, "$1.221"),
    (2000, "$1.563"),
    (2001, "$1.531"),
    (2002, "$1.441"),
    (2003, "$1.638"),
    (2004, "$1.923"),
];

pub(super) const GASOLINE_EARLY: &[(Year, Year, &str)] = &[
    (1914, 1917, "$0.15"),
    (1918, 1920, "$0.25"),
    (1921, 1929, "$0.21"),
    (1930, 1945, "$0.19"),
    (1946, 1949, "$0.24"),
    (1950, 1954, "$0.27"),
    (1955, 1959, "$0.30"),
    (1960, 1964, "$0.31"),
    (1965, 1969, "$0.33"),
];

pub(super) const BREAD_BY_DECADE: &[(Year, Year, &str)] = &[
    (1914, 1919, "$0.07"),
    (1920, 1929, "$0.12"),
    (1930, 1939, "$0.09"),
    (1940, 1949, "$0.08"),
    (1950, 1959, "$0.14"),
    (1960, 1969, "$0.20"),
    (1970, 1979, "$0.24"),
    (1980, 1989, "$0.50"),
    (1990, 1999, "$0.70"),
    (2000, 2004, "$0.99"),
];

pub(super) const MILK_BY_DECADE: &[(Year, Year, &str)] = &[
    (1914, 1919, "$0.36"),
    (1920, 1929, "$0.58"),
    (1930, 1939, "$0.56"),
    (1940, 1949, "$0.51"),
    (1950, 1959, "$0.82"),
    (1960, 1969, "$1.04"),
    (1970, 1979, "$1.32"),
    (1980, 1989, "$2.16"),
    (1990, 1999, "$2.78"),
    (2000, 2004, "$2.78"),
];

pub(super) const EGGS_BY_DECADE: &[(Year, Year, &str)] = &[
    (1914, 1919, "$0.34"),
    (1920, 1929, "$0.68"),
    (1930, 1939, "$0.45"),
    (1940, 1949, "$0.33"),
    (1950, 1959, "$0.60"),
    (1960, 1969, "$0.57"),
    (1970, 1979, "$0.61"),
    (1980, 1989, "$0.84"),
    (1990, 1999, "$1.00"),
    (2000, 2004, "$0.96"),
];

/// First-class letter rate in effect at the end of each year.
pub(super) const POSTAGE_STAMP: &[(Year, Year, &str)] = &[
    (1914, 1916, "$0.02"),
    (1917, 1918, "$0.03"),
    (1919, 1931, "$0.02"),
    (1932, 1957, "$0.03"),
    (1958, 1962, "$0.04"),
    (1963, 1967, "$0.05"),
    (1968, 1970, "$0.06"),
    (1971, 1973, "$0.08"),
    (1974, 1974, "$0.10"),
    (1975, 1977, "$0.13"),
    (1978, 1980, "$0.15"),
    (1981, 1984, "$0.20"),
    (1985, 1987, "$0.22"),
    (1988, 1990, "$0.25"),
    (1991, 1994, "$0.29"),
    (1995, 1998, "$0.32"),
    (1999, 2000, "$0.33"),
    (2001, 2001, "$0.34"),
    (2002, 2004, "$0.37"),
];

/// The most recent World Series champion as of the end of each year.
/// No series was played in 1994, so that year keeps 1993's champion.
pub(super) const WORLD_SERIES: &[(Year, &str)] = &[
    (1914, "Boston Braves"),
    (1915, "Boston Red Sox"),
    (1916, "Boston Red Sox"),
    (1917, "Chicago White Sox"),
    (1918, "Boston Red Sox"),
    (1919, "Cincinnati Reds"),
    (1920, "Cleveland Indians"),
    (1921, "New York Giants"),
    (1922, "New York Giants"),
    (1923, "New York Yankees"),
    (1924, "Washington Senators"),
    (1925, "Pittsburgh Pirates"),
    (1926, "St. Louis Cardinals"),
    (1927, "New York Yankees"),
    (1928, "New York Yankees"),
    (1929, "Philadelphia Athletics"),
    (1930, "Philadelphia Athletics"),
    (1931, "St. Louis Cardinals"),
    (1932, "New York Yankees"),
    (1933, "New York Giants"),
    (1934, "St. Louis Cardinals"),
    (1935, "Detroit Tigers"),
    (1936, "New York Yankees"),
    (1937, "New York Yankees"),
    (1938, "New York Yankees"),
    (1939, "New York Yankees"),
    (1940, "Cincinnati Reds"),
    (1941, "New York Yankees"),
    (1942, "St. Louis Cardinals"),
    (1943, "New York Yankees"),
    (1944, "St. Louis Cardinals"),
    (1945, "Detroit Tigers"),
    (1946, "St. Louis Cardinals"),
    (1947, "New York Yankees"),
    (1948, "Cleveland Indians"),
    (1949, "New York Yankees"),
    (1950, "New York Yankees"),
    (1951, "New York Yankees"),
    (1952, "New York Yankees"),
    (1953, "New York Yankees"),
    (1954, "New York Giants"),
    (1955, "Brooklyn Dodgers"),
    (1956, "New York Yankees"),
    (1957, "Milwaukee Braves"),
    (1958, "New York Yankees"),
    (1959, "Los Angeles Dodgers"),
    (1960, "Pittsburgh Pirates"),
    (1961, "New York Yankees"),
    (1962, "New York Yankees"),
    (1963, "Los Angeles Dodgers"),
    (1964, "St. Louis Cardinals"),
    (1965, "Los Angeles Dodgers"),
    (1966, "Baltimore Orioles"),
    (1967, "St. Louis Cardinals"),
    (1968, "Detroit Tigers"),
    (1969, "New York Mets"),
    (1970, "Baltimore Orioles"),
    (1971, "Pittsburgh Pirates"),
    (1972, "Oakland Athletics"),
    (1973, "Oakland Athletics"),
    (1974, "Oakland Athletics"),
    (1975, "Cincinnati Reds"),
    (1976, "Cincinnati Reds"),
    (1977, "New York Yankees"),
    (1978, "New York Yankees"),
    (1979, "Pittsburgh Pirates"),
    (1980, "Philadelphia Phillies"),
    (1981, "Los Angeles Dodgers"),
    (1982, "St. Louis Cardinals"),
    (1983, "Baltimore Orioles"),
    (1984, "Detroit Tigers"),
    (1985, "Kansas City Royals"),
    (1986, "New York Mets"),
    (1987, "Minnesota Twins"),
    (1988, "Los Angeles Dodgers"),
    (1989, "Oakland Athletics"),
    (1990, "Cincinnati Reds"),
    (1991, "Minnesota Twins"),
    (1992, "Toronto Blue Jays"),
    (1993, "Toronto Blue Jays"),
    (1994, "Toronto Blue Jays"),
    (1995, "Atlanta Braves"),
    (1996, "New York Yankees"),
    (1997, "Florida Marlins"),
    (1998, "New York Yankees"),
    (1999, "New York Yankees"),
    (2000, "New York Yankees"),
    (2001, "Arizona Diamondbacks"),
    (2002, "Anaheim Angels"),
    (2003, "Florida Marlins"),
    (2004, "Boston Red Sox"),
];

/// Billboard year-end number one single. Charts start in 1946.
pub(super) const NUMBER_ONE_SONGS: &[(Year, &str)] = &[
    (1946, "Prisoner of Love - Perry Como"),
    (1947, "Near You - Francis Craig"),
    (1948, "Twelfth Street Rag - Pee Wee Hunt"),
    (1949, "Riders in the Sky - Vaughn Monroe"),
    (1950, "Goodnight Irene - Gordon Jenkins & The Weavers"),
    (1951, "Too Young - Nat King Cole"),
    (1952, "Blue Tango - Leroy Anderson"),
    (1953, "The Song from Moulin Rouge - Percy Faith"),
    (1954, "Little Things Mean a Lot - Kitty Kallen"),
    (1955, "Cherry Pink and Apple Blossom White - Perez Prado"),
    (1956, "Heartbreak Hotel - Elvis Presley"),
    (1957, "All Shook Up - Elvis Presley"),
    (1958, "Volare - Domenico Modugno"),
    (1959, "The Battle of New Orleans - Johnny Horton"),
    (1960, "Theme from A Summer Place - Percy Faith"),
    (1961, "Tossin' and Turnin' - Bobby Lewis"),
    (1962, "Stranger on the Shore - Acker Bilk"),
    (1963, "Sugar Shack - Jimmy Gilmer and the Fireballs"),
    (1964, "I Want to Hold Your Hand - The Beatles"),
    (1965, "Wooly Bully - Sam the Sham and the Pharaohs"),
    (1966, "The Ballad of the Green Berets - SSgt. Barry Sadler"),
    (1967, "To Sir with Love - Lulu"),
    (1968, "Hey Jude - The Beatles"),
    (1969, "Sugar, Sugar - The Archies"),
    (1970, "Bridge over Troubled Water - Simon & Garfunkel"),
    (1971, "Joy to the World - Three Dog Night"),
    (1972, "The First Time Ever I Saw Your Face - Roberta Flack"),
    (1973, "Tie a Yellow Ribbon Round the Ole Oak Tree - Tony Orlando and Dawn"),
    (1974, "The Way We Were - Barbra Streisand"),
    (1975, "Love Will Keep Us Together - Captain & Tennille"),
    (1976, "Silly Love Songs - Wings"),
    (1977, "Tonight's the Night - Rod Stewart"),
    (1978, "Shadow Dancing - Andy Gibb"),
    (1979, "My Sharona - The Knack"),
    (1980, "Call Me - Blondie"),
    (1981, "Bette Davis Eyes - Kim Carnes"),
    (1982, "Physical - Olivia Newton-John"),
    (1983, "Every Breath You Take - The Police"),
    (1984, "When Doves Cry - Prince"),
    (1985, "Careless Whisper - Wham!"),
    (1986, "That's What Friends Are For - Dionne & Friends"),
    (1987, "Walk Like an Egyptian - The Bangles"),
    (1988, "Faith - George Michael"),
    (1989, "Look Away - Chicago"),
    (1990, "Hold On - Wilson Phillips"),
    (1991, "(Everything I Do) I Do It for You - Bryan Adams"),
    (1992, "End of the Road - Boyz II Men"),
    (1993, "I Will Always Love You - Whitney Houston"),
    (1994, "The Sign - Ace of Base"),
    (1995, "Gangsta's Paradise - Coolio"),
    (1996, "Macarena (Bayside Boys Mix) - Los del Rio"),
    (1997, "Candle in the Wind 1997 - Elton John"),
    (1998, "Too Close - Next"),
    (1999, "Believe - Cher"),
    (2000, "Breathe - Faith Hill"),
    (2001, "Hanging by a Moment - Lifehouse"),
    (2002, "How You Remind Me - Nickelback"),
    (2003, "In da Club - 50 Cent"),
    (2004, "Yeah! - Usher"),
];

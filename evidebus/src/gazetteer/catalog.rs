//! Compiled-in stop catalog.
//!
//! Collected from submitted listings, so names repeat and the order is
//! whatever the listings were entered in. `Gazetteer::new` removes the
//! duplicates.

pub(crate) const RAW_STOPS: &[&str] = &[
    "THIRUVANANTHAPURAM",
    "THAMPANOOR",
    "EAST FORT",
    "KAZHAKKOOTTAM",
    "ATTINGAL",
    "KALLAMBALAM",
    "VARKALA",
    "PARIPPALLY",
    "CHATHANNOOR",
    "KOTTIYAM",
    "KOLLAM",
    "KARUNAGAPPALLY",
    "KAYAMKULAM",
    "HARIPPAD",
    "AMBALAPPUZHA",
    "ALAPPUZHA",
    "CHERTHALA",
    "AROOR",
    "VYTTILA",
    "ERNAKULAM",
    "KALOOR",
    "EDAPPALLY",
    "ALUVA",
    "ANGAMALY",
    "CHALAKUDY",
    "KODAKARA",
    "THRISSUR",
    "KUNNAMKULAM",
    "EDAPPAL",
    "KUTTIPPURAM",
    "VALANCHERY",
    "KOTTAKKAL",
    "MALAPPURAM",
    "MANJERI",
    "PERINTHALMANNA",
    "KONDOTTY",
    "RAMANATTUKARA",
    "KOZHIKODE",
    "KOYILANDY",
    "VADAKARA",
    "THALASSERY",
    "KANNUR",
    "TALIPARAMBA",
    "PAYYANUR",
    "KANHANGAD",
    "KASARAGOD",
    "KALPETTA",
    "SULTHAN BATHERY",
    "MANANTHAVADY",
    "PALAKKAD",
    "OTTAPALAM",
    "SHORNUR",
    "PATTAMBI",
    "MANNARKKAD",
    "KOTTAYAM",
    "CHANGANASSERY",
    "THIRUVALLA",
    "CHENGANNUR",
    "PATHANAMTHITTA",
    "ADOOR",
    "PANDALAM",
    "KOTTARAKKARA",
    "PUNALUR",
    "PALA",
    "ERATTUPETTA",
    "THODUPUZHA",
    "MUVATTUPUZHA",
    "KOTHAMANGALAM",
    "PERUMBAVOOR",
    "MUNNAR",
    "ADIMALI",
    "KUMILY",
    "KATTAPPANA",
    "NEDUMKANDAM",
    "GURUVAYUR",
    "IRINJALAKUDA",
    "KODUNGALLUR",
    "NORTH PARAVUR",
    "FORT KOCHI",
    "THRIPUNITHURA",
    "MAVOOR",
    "MUKKAM",
    "THAMARASSERY",
    "BALUSSERY",
    "PERAMBRA",
    "NADAPURAM",
    "IRITTY",
    "MATTANNUR",
    "NILAMBUR",
    "WANDOOR",
    "TIRUR",
    "PONNANI",
    "CHAVAKKAD",
    // Repeats from later submissions.
    "KOZHIKODE",
    "THRISSUR",
    "ERNAKULAM",
    "KOTTAYAM",
    "PALAKKAD",
    "KANNUR",
    "ALUVA",
    "MALAPPURAM",
    "KOLLAM",
    "THIRUVANANTHAPURAM",
    "MUNNAR",
    "GURUVAYUR",
    "VYTTILA",
];

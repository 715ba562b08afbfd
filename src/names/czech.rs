//! Built-in Czech name table

use super::{NameList, NameTable};

const MALE_GIVEN: [&str; 25] = [
    "Jan", "Tomáš", "Petr", "Jakub", "Lukáš", "Martin", "Michal", "David", "Pavel", "Josef",
    "Vojtěch", "Marek", "Daniel", "Adam", "Ondřej", "Matěj", "Jiří", "Radek", "Karel", "Aleš",
    "Roman", "Libor", "Štěpán", "Richard", "Dominik",
];

const MALE_FAMILY: [&str; 25] = [
    "Novák", "Svoboda", "Novotný", "Dvořák", "Černý", "Procházka", "Kučera", "Veselý", "Horák",
    "Němec", "Pokorný", "Marek", "Král", "Bartoš", "Janda", "Fiala", "Kadlec", "Vacek", "Blažek",
    "Holub", "Šimek", "Hruška", "Kolář", "Urban", "Richter",
];

const FEMALE_GIVEN: [&str; 25] = [
    "Jana", "Petra", "Lucie", "Eva", "Martina", "Kateřina", "Michaela", "Veronika", "Monika",
    "Tereza", "Anna", "Alena", "Barbora", "Kristýna", "Helena", "Nikola", "Gabriela", "Lenka",
    "Markéta", "Pavla", "Radka", "Eliška", "Marie", "Simona", "Denisa",
];

const FEMALE_FAMILY: [&str; 25] = [
    "Nováková", "Svobodová", "Novotná", "Dvořáková", "Černá", "Procházková", "Kučerová",
    "Veselá", "Horáková", "Němcová", "Pokorná", "Marková", "Králová", "Bartošová", "Jandová",
    "Fialová", "Kadlecová", "Vacková", "Blažková", "Holubová", "Šimková", "Hrušková",
    "Kolářová", "Urbanová", "Richterová",
];

fn list(given: &[&str], family: &[&str]) -> NameList {
    NameList {
        given_names: given.iter().map(|s| (*s).to_string()).collect(),
        family_names: family.iter().map(|s| (*s).to_string()).collect(),
    }
}

pub(super) fn table() -> NameTable {
    NameTable::new(
        list(&MALE_GIVEN, &MALE_FAMILY),
        list(&FEMALE_GIVEN, &FEMALE_FAMILY),
    )
}

// 📜 Sanctoral Cycle - Fixed-date feasts of the 1962 universal calendar
// Rules as data: (month, day, name, class, row). Row 0 keeps the rank default.

use crate::rank::rows::{LORD, NATIVITY_VIGIL, OUR_LADY_I, PRINCIPAL};
use crate::rank::Class::{self, I, II, III, IV};

pub(crate) const DEFAULT_ROW: u8 = 0;
const D: u8 = DEFAULT_ROW;

/// Fixed feasts in calendar order. Class IV entries are the commemorations.
pub(crate) const SANCTORAL: &[(u32, u32, &str, Class, u8)] = &[
    // ------------------------------------------------------------------ January
    (1, 1, "Octave Day of the Nativity", I, LORD),
    (1, 6, "Epiphany of Our Lord", I, LORD),
    (1, 13, "Commemoration of the Baptism of Our Lord", II, D),
    (1, 14, "Saint Hilary, Bishop, Confessor and Doctor", III, D),
    (1, 14, "Saint Felix of Nola, Priest and Martyr", IV, D),
    (1, 15, "Saint Paul the First Hermit", III, D),
    (1, 15, "Saint Maurus, Abbot", IV, D),
    (1, 16, "Saint Marcellus I, Pope and Martyr", III, D),
    (1, 17, "Saint Anthony, Abbot", III, D),
    (1, 18, "Saint Prisca, Virgin and Martyr", IV, D),
    (1, 19, "Saints Marius, Martha, Audifax and Abachum, Martyrs", IV, D),
    (1, 19, "Saint Canute, King and Martyr", IV, D),
    (1, 20, "Saints Fabian, Pope, and Sebastian, Martyrs", III, D),
    (1, 21, "Saint Agnes, Virgin and Martyr", III, D),
    (1, 22, "Saints Vincent and Anastasius, Martyrs", III, D),
    (1, 23, "Saint Raymond of Peñafort, Confessor", III, D),
    (1, 23, "Saint Emerentiana, Virgin and Martyr", IV, D),
    (1, 24, "Saint Timothy, Bishop and Martyr", III, D),
    (1, 25, "Conversion of Saint Paul, Apostle", III, D),
    (1, 26, "Saint Polycarp, Bishop and Martyr", III, D),
    (1, 27, "Saint John Chrysostom, Bishop, Confessor and Doctor", III, D),
    (1, 28, "Saint Peter Nolasco, Confessor", III, D),
    (1, 29, "Saint Francis de Sales, Bishop, Confessor and Doctor", III, D),
    (1, 30, "Saint Martina, Virgin and Martyr", III, D),
    (1, 31, "Saint John Bosco, Confessor", III, D),
    // ----------------------------------------------------------------- February
    (2, 1, "Saint Ignatius, Bishop and Martyr", III, D),
    (2, 2, "Purification of the Blessed Virgin Mary", II, LORD),
    (2, 3, "Saint Blaise, Bishop and Martyr", IV, D),
    (2, 4, "Saint Andrew Corsini, Bishop and Confessor", III, D),
    (2, 5, "Saint Agatha, Virgin and Martyr", III, D),
    (2, 6, "Saint Titus, Bishop and Confessor", III, D),
    (2, 6, "Saint Dorothy, Virgin and Martyr", IV, D),
    (2, 7, "Saint Romuald, Abbot", III, D),
    (2, 8, "Saint John of Matha, Confessor", III, D),
    (2, 9, "Saint Cyril of Alexandria, Bishop, Confessor and Doctor", III, D),
    (2, 9, "Saint Apollonia, Virgin and Martyr", IV, D),
    (2, 10, "Saint Scholastica, Virgin", III, D),
    (2, 11, "Apparition of the Immaculate Virgin Mary at Lourdes", III, D),
    (2, 12, "Seven Holy Founders of the Servite Order, Confessors", III, D),
    (2, 14, "Saint Valentine, Priest and Martyr", IV, D),
    (2, 15, "Saints Faustinus and Jovita, Martyrs", IV, D),
    (2, 18, "Saint Simeon, Bishop and Martyr", IV, D),
    (2, 22, "Chair of Saint Peter, Apostle", II, D),
    (2, 23, "Saint Peter Damian, Bishop, Confessor and Doctor", III, D),
    (2, 24, "Saint Matthias, Apostle", II, D),
    (2, 27, "Saint Gabriel of Our Lady of Sorrows, Confessor", III, D),
    // -------------------------------------------------------------------- March
    (3, 4, "Saint Casimir, Confessor", III, D),
    (3, 4, "Saint Lucius I, Pope and Martyr", IV, D),
    (3, 6, "Saints Perpetua and Felicity, Martyrs", III, D),
    (3, 7, "Saint Thomas Aquinas, Confessor and Doctor", III, D),
    (3, 8, "Saint John of God, Confessor", III, D),
    (3, 9, "Saint Frances of Rome, Widow", III, D),
    (3, 10, "Forty Holy Martyrs", III, D),
    (3, 12, "Saint Gregory I, Pope, Confessor and Doctor", III, D),
    (3, 17, "Saint Patrick, Bishop and Confessor", III, D),
    (3, 18, "Saint Cyril of Jerusalem, Bishop, Confessor and Doctor", III, D),
    (3, 19, "Saint Joseph, Spouse of the Blessed Virgin Mary", I, D),
    (3, 21, "Saint Benedict, Abbot", III, D),
    (3, 24, "Saint Gabriel the Archangel", III, D),
    (3, 25, "Annunciation of the Blessed Virgin Mary", I, D),
    (3, 27, "Saint John Damascene, Confessor and Doctor", III, D),
    (3, 28, "Saint John Capistran, Confessor", III, D),
    // -------------------------------------------------------------------- April
    (4, 2, "Saint Francis of Paola, Confessor", III, D),
    (4, 4, "Saint Isidore, Bishop, Confessor and Doctor", III, D),
    (4, 5, "Saint Vincent Ferrer, Confessor", III, D),
    (4, 11, "Saint Leo I, Pope, Confessor and Doctor", III, D),
    (4, 13, "Saint Hermenegild, Martyr", III, D),
    (4, 14, "Saint Justin, Martyr", III, D),
    (4, 14, "Saints Tiburtius, Valerian and Maximus, Martyrs", IV, D),
    (4, 17, "Saint Anicetus, Pope and Martyr", IV, D),
    (4, 21, "Saint Anselm, Bishop, Confessor and Doctor", III, D),
    (4, 22, "Saints Soter and Caius, Popes and Martyrs", III, D),
    (4, 23, "Saint George, Martyr", IV, D),
    (4, 24, "Saint Fidelis of Sigmaringen, Martyr", III, D),
    (4, 25, "Saint Mark, Evangelist", II, D),
    (4, 26, "Saints Cletus and Marcellinus, Popes and Martyrs", III, D),
    (4, 27, "Saint Peter Canisius, Confessor and Doctor", III, D),
    (4, 28, "Saint Paul of the Cross, Confessor", III, D),
    (4, 28, "Saint Vitalis, Martyr", IV, D),
    (4, 29, "Saint Peter of Verona, Martyr", III, D),
    (4, 30, "Saint Catherine of Siena, Virgin", III, D),
    // ---------------------------------------------------------------------- May
    (5, 1, "Saint Joseph the Worker", I, D),
    (5, 2, "Saint Athanasius, Bishop, Confessor and Doctor", III, D),
    (5, 3, "Saints Alexander, Eventius, Theodulus and Juvenal, Martyrs", IV, D),
    (5, 4, "Saint Monica, Widow", III, D),
    (5, 5, "Saint Pius V, Pope and Confessor", III, D),
    (5, 7, "Saint Stanislaus, Bishop and Martyr", III, D),
    (5, 9, "Saint Gregory Nazianzen, Bishop, Confessor and Doctor", III, D),
    (5, 10, "Saint Antoninus, Bishop and Confessor", III, D),
    (5, 10, "Saints Gordian and Epimachus, Martyrs", IV, D),
    (5, 11, "Saints Philip and James, Apostles", II, D),
    (5, 12, "Saints Nereus, Achilleus, Domitilla and Pancras, Martyrs", III, D),
    (5, 13, "Saint Robert Bellarmine, Bishop, Confessor and Doctor", III, D),
    (5, 14, "Saint Boniface, Martyr", IV, D),
    (5, 15, "Saint John Baptist de la Salle, Confessor", III, D),
    (5, 16, "Saint Ubaldus, Bishop and Confessor", III, D),
    (5, 17, "Saint Paschal Baylon, Confessor", III, D),
    (5, 18, "Saint Venantius, Martyr", III, D),
    (5, 19, "Saint Peter Celestine, Pope and Confessor", III, D),
    (5, 19, "Saint Pudentiana, Virgin", IV, D),
    (5, 20, "Saint Bernardine of Siena, Confessor", III, D),
    (5, 25, "Saint Gregory VII, Pope and Confessor", III, D),
    (5, 25, "Saint Urban I, Pope and Martyr", IV, D),
    (5, 26, "Saint Philip Neri, Confessor", III, D),
    (5, 26, "Saint Eleutherius, Pope and Martyr", IV, D),
    (5, 27, "Saint Bede the Venerable, Confessor and Doctor", III, D),
    (5, 27, "Saint John I, Pope and Martyr", IV, D),
    (5, 28, "Saint Augustine of Canterbury, Bishop and Confessor", III, D),
    (5, 29, "Saint Mary Magdalen de Pazzi, Virgin", III, D),
    (5, 30, "Saint Felix I, Pope and Martyr", IV, D),
    (5, 31, "Queenship of the Blessed Virgin Mary", II, D),
    (5, 31, "Saint Petronilla, Virgin", IV, D),
    // --------------------------------------------------------------------- June
    (6, 1, "Saint Angela Merici, Virgin", III, D),
    (6, 2, "Saints Marcellinus, Peter and Erasmus, Martyrs", IV, D),
    (6, 4, "Saint Francis Caracciolo, Confessor", III, D),
    (6, 5, "Saint Boniface, Bishop and Martyr", III, D),
    (6, 6, "Saint Norbert, Bishop and Confessor", III, D),
    (6, 9, "Saints Primus and Felician, Martyrs", IV, D),
    (6, 10, "Saint Margaret of Scotland, Widow", III, D),
    (6, 11, "Saint Barnabas, Apostle", III, D),
    (6, 12, "Saint John of San Facundo, Confessor", III, D),
    (6, 12, "Saints Basilides, Cyrinus, Nabor and Nazarius, Martyrs", IV, D),
    (6, 13, "Saint Anthony of Padua, Confessor and Doctor", III, D),
    (6, 14, "Saint Basil the Great, Bishop, Confessor and Doctor", III, D),
    (6, 15, "Saints Vitus, Modestus and Crescentia, Martyrs", IV, D),
    (6, 17, "Saint Gregory Barbarigo, Bishop and Confessor", III, D),
    (6, 18, "Saint Ephrem, Deacon, Confessor and Doctor", III, D),
    (6, 18, "Saints Mark and Marcellian, Martyrs", IV, D),
    (6, 19, "Saint Juliana Falconieri, Virgin", III, D),
    (6, 19, "Saints Gervase and Protase, Martyrs", IV, D),
    (6, 20, "Saint Silverius, Pope and Martyr", IV, D),
    (6, 21, "Saint Aloysius Gonzaga, Confessor", III, D),
    (6, 22, "Saint Paulinus, Bishop and Confessor", III, D),
    (6, 24, "Nativity of Saint John the Baptist", I, D),
    (6, 26, "Saints John and Paul, Martyrs", III, D),
    (6, 28, "Saint Irenaeus, Bishop and Martyr", III, D),
    (6, 29, "Saints Peter and Paul, Apostles", I, D),
    (6, 30, "Commemoration of Saint Paul, Apostle", III, D),
    // --------------------------------------------------------------------- July
    (7, 1, "Most Precious Blood of Our Lord Jesus Christ", I, LORD),
    (7, 2, "Visitation of the Blessed Virgin Mary", II, D),
    (7, 3, "Saint Leo II, Pope and Confessor", IV, D),
    (7, 5, "Saint Anthony Mary Zaccaria, Confessor", III, D),
    (7, 7, "Saints Cyril and Methodius, Bishops and Confessors", III, D),
    (7, 8, "Saint Elizabeth of Portugal, Widow", III, D),
    (7, 10, "Seven Holy Brothers, Martyrs", III, D),
    (7, 11, "Saint Pius I, Pope and Martyr", IV, D),
    (7, 12, "Saint John Gualbert, Abbot", III, D),
    (7, 12, "Saints Nabor and Felix, Martyrs", IV, D),
    (7, 14, "Saint Bonaventure, Bishop, Confessor and Doctor", III, D),
    (7, 15, "Saint Henry, Emperor and Confessor", III, D),
    (7, 16, "Our Lady of Mount Carmel", IV, D),
    (7, 17, "Saint Alexius, Confessor", IV, D),
    (7, 18, "Saint Camillus de Lellis, Confessor", III, D),
    (7, 18, "Saint Symphorosa and her Seven Sons, Martyrs", IV, D),
    (7, 19, "Saint Vincent de Paul, Confessor", III, D),
    (7, 20, "Saint Jerome Emiliani, Confessor", III, D),
    (7, 20, "Saint Margaret, Virgin and Martyr", IV, D),
    (7, 21, "Saint Lawrence of Brindisi, Confessor and Doctor", III, D),
    (7, 21, "Saint Praxedes, Virgin", IV, D),
    (7, 22, "Saint Mary Magdalene, Penitent", III, D),
    (7, 23, "Saint Apollinaris, Bishop and Martyr", III, D),
    (7, 23, "Saint Liborius, Bishop and Confessor", IV, D),
    (7, 24, "Saint Christina, Virgin and Martyr", IV, D),
    (7, 25, "Saint James, Apostle", II, D),
    (7, 25, "Saint Christopher, Martyr", IV, D),
    (7, 26, "Saint Anne, Mother of the Blessed Virgin Mary", II, D),
    (7, 27, "Saint Pantaleon, Martyr", IV, D),
    (7, 28, "Saints Nazarius and Celsus, Victor I and Innocent I", III, D),
    (7, 29, "Saint Martha, Virgin", III, D),
    (7, 29, "Saints Felix, Simplicius, Faustinus and Beatrice, Martyrs", IV, D),
    (7, 30, "Saints Abdon and Sennen, Martyrs", IV, D),
    (7, 31, "Saint Ignatius of Loyola, Confessor", III, D),
    // ------------------------------------------------------------------- August
    (8, 1, "Holy Machabees, Martyrs", IV, D),
    (8, 2, "Saint Alphonsus Mary de Liguori, Bishop, Confessor and Doctor", III, D),
    (8, 2, "Saint Stephen I, Pope and Martyr", IV, D),
    (8, 4, "Saint Dominic, Confessor", III, D),
    (8, 5, "Dedication of Saint Mary of the Snows", III, D),
    (8, 6, "Transfiguration of Our Lord Jesus Christ", II, LORD),
    (8, 6, "Saints Sixtus II, Pope, Felicissimus and Agapitus, Martyrs", IV, D),
    (8, 7, "Saint Cajetan, Confessor", III, D),
    (8, 7, "Saint Donatus, Bishop and Martyr", IV, D),
    (8, 8, "Saints Cyriacus, Largus and Smaragdus, Martyrs", IV, D),
    (8, 9, "Saint John Mary Vianney, Confessor", III, D),
    (8, 9, "Saint Romanus, Martyr", IV, D),
    (8, 10, "Saint Lawrence, Martyr", II, D),
    (8, 11, "Saints Tiburtius and Susanna, Martyrs", IV, D),
    (8, 12, "Saint Clare, Virgin", III, D),
    (8, 13, "Saints Hippolytus and Cassian, Martyrs", IV, D),
    (8, 14, "Saint Eusebius, Confessor", IV, D),
    (8, 15, "Assumption of the Blessed Virgin Mary", I, OUR_LADY_I),
    (8, 16, "Saint Joachim, Father of the Blessed Virgin Mary", II, D),
    (8, 17, "Saint Hyacinth, Confessor", III, D),
    (8, 18, "Saint Agapitus, Martyr", IV, D),
    (8, 19, "Saint John Eudes, Confessor", III, D),
    (8, 20, "Saint Bernard, Abbot and Doctor", III, D),
    (8, 21, "Saint Jane Frances de Chantal, Widow", III, D),
    (8, 22, "Immaculate Heart of the Blessed Virgin Mary", II, D),
    (8, 22, "Saints Timothy, Hippolytus and Symphorian, Martyrs", IV, D),
    (8, 23, "Saint Philip Benizi, Confessor", III, D),
    (8, 24, "Saint Bartholomew, Apostle", II, D),
    (8, 25, "Saint Louis, King and Confessor", III, D),
    (8, 26, "Saint Zephyrinus, Pope and Martyr", IV, D),
    (8, 27, "Saint Joseph Calasanctius, Confessor", III, D),
    (8, 28, "Saint Augustine, Bishop, Confessor and Doctor", III, D),
    (8, 28, "Saint Hermes, Martyr", IV, D),
    (8, 29, "Beheading of Saint John the Baptist", III, D),
    (8, 29, "Saint Sabina, Martyr", IV, D),
    (8, 30, "Saint Rose of Lima, Virgin", III, D),
    (8, 30, "Saints Felix and Adauctus, Martyrs", IV, D),
    (8, 31, "Saint Raymond Nonnatus, Confessor", III, D),
    // ---------------------------------------------------------------- September
    (9, 1, "Saint Giles, Abbot", IV, D),
    (9, 1, "Twelve Holy Brothers, Martyrs", IV, D),
    (9, 2, "Saint Stephen, King and Confessor", III, D),
    (9, 3, "Saint Pius X, Pope and Confessor", III, D),
    (9, 5, "Saint Lawrence Justinian, Bishop and Confessor", III, D),
    (9, 8, "Nativity of the Blessed Virgin Mary", II, D),
    (9, 8, "Saint Adrian, Martyr", IV, D),
    (9, 9, "Saint Gorgonius, Martyr", IV, D),
    (9, 10, "Saint Nicholas of Tolentino, Confessor", III, D),
    (9, 11, "Saints Protus and Hyacinth, Martyrs", IV, D),
    (9, 12, "Most Holy Name of Mary", III, D),
    (9, 14, "Exaltation of the Holy Cross", II, LORD),
    (9, 15, "Seven Sorrows of the Blessed Virgin Mary", II, D),
    (9, 15, "Saint Nicomedes, Martyr", IV, D),
    (9, 16, "Saints Cornelius, Pope, and Cyprian, Bishop, Martyrs", III, D),
    (9, 17, "Impression of the Stigmata of Saint Francis", III, D),
    (9, 18, "Saint Joseph of Cupertino, Confessor", III, D),
    (9, 19, "Saint Januarius and Companions, Martyrs", III, D),
    (9, 20, "Saint Eustace and Companions, Martyrs", IV, D),
    (9, 21, "Saint Matthew, Apostle and Evangelist", II, D),
    (9, 22, "Saint Thomas of Villanova, Bishop and Confessor", III, D),
    (9, 23, "Saint Linus, Pope and Martyr", III, D),
    (9, 23, "Saint Thecla, Virgin and Martyr", IV, D),
    (9, 24, "Our Lady of Ransom", IV, D),
    (9, 26, "Saints Cyprian and Justina, Martyrs", IV, D),
    (9, 27, "Saints Cosmas and Damian, Martyrs", III, D),
    (9, 28, "Saint Wenceslaus, Duke and Martyr", III, D),
    (9, 29, "Dedication of Saint Michael the Archangel", I, D),
    (9, 30, "Saint Jerome, Priest, Confessor and Doctor", III, D),
    // ------------------------------------------------------------------ October
    (10, 1, "Saint Remigius, Bishop and Confessor", IV, D),
    (10, 2, "Holy Guardian Angels", III, D),
    (10, 3, "Saint Thérèse of the Child Jesus, Virgin", III, D),
    (10, 4, "Saint Francis of Assisi, Confessor", III, D),
    (10, 5, "Saints Placid and Companions, Martyrs", IV, D),
    (10, 6, "Saint Bruno, Confessor", III, D),
    (10, 7, "Our Lady of the Rosary", II, D),
    (10, 8, "Saint Bridget, Widow", III, D),
    (10, 9, "Saint John Leonardi, Confessor", III, D),
    (10, 9, "Saints Denis, Rusticus and Eleutherius, Martyrs", IV, D),
    (10, 10, "Saint Francis Borgia, Confessor", III, D),
    (10, 11, "Motherhood of the Blessed Virgin Mary", II, D),
    (10, 13, "Saint Edward, King and Confessor", III, D),
    (10, 14, "Saint Callistus I, Pope and Martyr", III, D),
    (10, 15, "Saint Teresa of Jesus, Virgin", III, D),
    (10, 16, "Saint Hedwig, Widow", III, D),
    (10, 17, "Saint Margaret Mary Alacoque, Virgin", III, D),
    (10, 18, "Saint Luke, Evangelist", II, D),
    (10, 19, "Saint Peter of Alcantara, Confessor", III, D),
    (10, 20, "Saint John Cantius, Confessor", III, D),
    (10, 21, "Saint Hilarion, Abbot", IV, D),
    (10, 24, "Saint Raphael the Archangel", III, D),
    (10, 25, "Saints Chrysanthus and Daria, Martyrs", IV, D),
    (10, 26, "Saint Evaristus, Pope and Martyr", IV, D),
    (10, 28, "Saints Simon and Jude, Apostles", II, D),
    // ----------------------------------------------------------------- November
    (11, 1, "All Saints", I, D),
    (11, 2, "Commemoration of All the Faithful Departed", I, D),
    (11, 4, "Saint Charles Borromeo, Bishop and Confessor", III, D),
    (11, 4, "Saints Vitalis and Agricola, Martyrs", IV, D),
    (11, 8, "Four Holy Crowned Martyrs", IV, D),
    (11, 9, "Dedication of the Archbasilica of the Most Holy Saviour", II, LORD),
    (11, 10, "Saint Andrew Avellino, Confessor", III, D),
    (11, 10, "Saints Tryphon, Respicius and Nympha, Martyrs", IV, D),
    (11, 11, "Saint Martin, Bishop and Confessor", III, D),
    (11, 11, "Saint Mennas, Martyr", IV, D),
    (11, 12, "Saint Martin I, Pope and Martyr", III, D),
    (11, 13, "Saint Didacus, Confessor", III, D),
    (11, 14, "Saint Josaphat, Bishop and Martyr", III, D),
    (11, 15, "Saint Albert the Great, Bishop, Confessor and Doctor", III, D),
    (11, 16, "Saint Gertrude, Virgin", III, D),
    (11, 17, "Saint Gregory Thaumaturgus, Bishop and Confessor", III, D),
    (11, 18, "Dedication of the Basilicas of Saints Peter and Paul", III, D),
    (11, 19, "Saint Elizabeth of Hungary, Widow", III, D),
    (11, 19, "Saint Pontian, Pope and Martyr", IV, D),
    (11, 20, "Saint Felix of Valois, Confessor", III, D),
    (11, 21, "Presentation of the Blessed Virgin Mary", III, D),
    (11, 22, "Saint Cecilia, Virgin and Martyr", III, D),
    (11, 23, "Saint Clement I, Pope and Martyr", III, D),
    (11, 23, "Saint Felicity, Martyr", IV, D),
    (11, 24, "Saint John of the Cross, Confessor and Doctor", III, D),
    (11, 24, "Saint Chrysogonus, Martyr", IV, D),
    (11, 25, "Saint Catherine of Alexandria, Virgin and Martyr", III, D),
    (11, 26, "Saint Sylvester, Abbot", III, D),
    (11, 26, "Saint Peter of Alexandria, Bishop and Martyr", IV, D),
    (11, 29, "Saint Saturninus, Martyr", IV, D),
    (11, 30, "Saint Andrew, Apostle", II, D),
    // ----------------------------------------------------------------- December
    (12, 2, "Saint Bibiana, Virgin and Martyr", III, D),
    (12, 3, "Saint Francis Xavier, Confessor", III, D),
    (12, 4, "Saint Peter Chrysologus, Bishop, Confessor and Doctor", III, D),
    (12, 4, "Saint Barbara, Virgin and Martyr", IV, D),
    (12, 5, "Saint Sabbas, Abbot", IV, D),
    (12, 6, "Saint Nicholas, Bishop and Confessor", III, D),
    (12, 7, "Saint Ambrose, Bishop, Confessor and Doctor", III, D),
    (12, 8, "Immaculate Conception of the Blessed Virgin Mary", I, OUR_LADY_I),
    (12, 10, "Saint Melchiades, Pope and Martyr", IV, D),
    (12, 11, "Saint Damasus I, Pope and Confessor", III, D),
    (12, 13, "Saint Lucy, Virgin and Martyr", III, D),
    (12, 16, "Saint Eusebius, Bishop and Martyr", III, D),
    (12, 21, "Saint Thomas, Apostle", II, D),
    (12, 25, "Nativity of Our Lord Jesus Christ", I, PRINCIPAL),
    (12, 26, "Saint Stephen, Protomartyr", II, D),
    (12, 27, "Saint John, Apostle and Evangelist", II, D),
    (12, 28, "Holy Innocents, Martyrs", II, D),
    (12, 29, "Saint Thomas Becket, Bishop and Martyr", IV, D),
    (12, 31, "Saint Sylvester I, Pope and Confessor", IV, D),
];

/// Dates whose celebration admits no commemoration (All Souls, Christmas Eve)
pub(crate) const WITHOUT_COMMEMORATIONS: &[(u32, u32)] = &[(11, 2), (12, 24)];

/// Feasts dropped rather than commemorated when outranked. The Baptism
/// yields to the Holy Family when Jan 13 is a Sunday.
pub(crate) const OMITTED_WHEN_IMPEDED: &[(u32, u32)] = &[(1, 13)];

/// Fixed vigils: (month, day, name, class, row)
pub(crate) const VIGILS: &[(u32, u32, &str, Class, u8)] = &[
    (6, 23, "Vigil of Saint John the Baptist", II, D),
    (6, 28, "Vigil of Saints Peter and Paul", II, D),
    (8, 9, "Vigil of Saint Lawrence", III, D),
    (8, 14, "Vigil of the Assumption", II, D),
    (12, 24, "Vigil of the Nativity", I, NATIVITY_VIGIL),
];

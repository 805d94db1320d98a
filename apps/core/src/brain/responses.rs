//! Canned response catalog.
//!
//! One pre-written French reply per intent. The catalog is static data,
//! immutable at runtime; every reply is non-empty, so the engine's output
//! is non-empty for all inputs.

use super::intent::{ContainerIntent, Intent, OutdoorIntent, PoolIntent};

const EMPTY: &str = "Je n'ai pas bien compris votre message. Pourriez-vous reformuler votre \
    question en quelques mots ?";

const GREETING: &str = "Bonjour et bienvenue ! Je suis l'assistant Éclat de Jardin. Je vous \
    accompagne dans vos projets de piscines (coque, maçonnée, container), d'aménagements \
    extérieurs (terrasses, escaliers, clôtures, enrochements) et de containers architecturaux \
    (pool house, bureau, atelier). Comment puis-je vous aider ?";

const THANKS: &str = "Je vous en prie, c'est un plaisir de vous renseigner. N'hésitez pas à \
    demander une étude personnalisée gratuite pour approfondir votre projet. L'équipe Éclat \
    de Jardin reste à votre disposition. À très bientôt !";

const CONTACT: &str = "Pour un échange personnalisé, vous pouvez remplir le formulaire de \
    contact du site, nous appeler au numéro indiqué en bas de page, ou prendre rendez-vous à \
    notre bureau de Schiltigheim. Nous nous déplaçons gratuitement pour une visite technique \
    sur site et une étude sans engagement.";

const LEAD_TIME: &str = "Nos délais moyens de réalisation : piscine coque 3 à 4 semaines, \
    piscine maçonnée 6 à 10 semaines, piscine container 8 à 12 semaines, terrasse 2 à 4 \
    semaines, container architectural 8 à 12 semaines. Un planning détaillé vous est remis \
    lors de l'étude personnalisée.";

const ZONE: &str = "Éclat de Jardin intervient à Strasbourg et dans tout le Bas-Rhin, ainsi \
    que dans les départements limitrophes : Haut-Rhin, Moselle et Vosges. Notre siège est \
    situé à Schiltigheim. Pour les projets d'envergure, nous étudions les demandes sur \
    l'ensemble du Grand Est.";

const GUARANTEE: &str = "Tous nos chantiers bénéficient d'une couverture complète : garantie \
    décennale sur la structure et l'étanchéité, garantie biennale sur les équipements, \
    garantie de parfait achèvement et assurance responsabilité civile professionnelle. Les \
    attestations sont fournies avant le démarrage des travaux.";

const PROCESS: &str = "Votre projet se déroule en cinq étapes : 1. Échange et visite technique \
    sur site, 2. Étude et conception sur mesure, 3. Validation du devis et du planning, 4. \
    Terrassement et travaux, 5. Finitions et réception du chantier. Nous vous accompagnons à \
    chaque étape.";

const COMPANY: &str = "Éclat de Jardin est une entreprise paysagiste basée à Schiltigheim, aux \
    portes de Strasbourg, forte de plus de 15 ans d'expérience. Notre signature : allier \
    technicité et esthétique sur chaque chantier, des piscines aux containers architecturaux.";

const POOL_PRICE: &str = "Le budget d'une piscine dépend de nombreux paramètres : typologie, \
    dimensions, accès au terrain, finitions. Pour une piscine coque polyester, comptez entre \
    25 000 € et 45 000 €. Une piscine maçonnée en béton se situe entre 35 000 € et 70 000 €. \
    Les piscines containers démarrent autour de 30 000 €. Je vous invite à demander une étude \
    personnalisée gratuite pour un chiffrage précis.";

const POOL_CONTAINER: &str = "Nos piscines containers sont réalisées à partir de containers \
    maritimes transformés en bassins étanches dans notre atelier. La structure métallique est \
    découpée, renforcée et traitée anti-corrosion, puis reçoit un revêtement liner armé. \
    Filtration, chauffage et éclairage LED sont intégrés avant la pose sur dalle béton \
    préparée.";

const POOL_SHELL: &str = "Les coques polyester que nous installons proviennent de fabricants \
    reconnus, avec une garantie structure de 10 ans. Nous réalisons l'excavation, le \
    terrassement, la pose sur lit stabilisé, le raccordement hydraulique, le local technique \
    avec filtration et la finition des abords. Installation rapide : 3 à 4 semaines.";

const POOL_MASONRY: &str = "La piscine maçonnée en béton armé est la solution la plus \
    flexible : forme, profondeur et dimensions entièrement sur mesure, y compris les bassins \
    à débordement. Ferraillage sur plan, coulage de béton vibré, enduit hydraulique \
    multicouche puis revêtement final (liner armé, membrane ou carrelage). Une construction \
    pérenne, adaptée aux terrains complexes.";

const POOL_FILTRATION: &str = "Nous proposons plusieurs systèmes de filtration premium : \
    filtre à sable haute performance, filtration à cartouche ou à diatomées. Nos pompes à \
    vitesse variable optimisent la consommation énergétique. Côté traitement de l'eau : \
    électrolyseur au sel, régulation automatique du pH et chauffage par pompe à chaleur.";

const POOL_GENERAL: &str = "Nous concevons trois typologies de piscines : coques polyester \
    (installation rapide, garantie structure), piscines maçonnées en béton armé (formes sur \
    mesure) et piscines containers (design contemporain). Chaque projet de piscine coque ou \
    maçonnée inclut l'étude de sol, le terrassement, la filtration et les finitions. \
    Souhaitez-vous des précisions sur le budget, les délais, le type de solution, les \
    garanties ou le déroulement du chantier ?";

const OUTDOOR_DECK: &str = "Nos terrasses premium se déclinent en bois exotique (ipé, \
    cumaru), composite haute qualité ou pierre naturelle (travertin, granit). Nous réalisons \
    l'étude de nivellement, la structure porteuse, le drainage et la pose avec joints \
    calibrés, pour une finition durable et élégante.";

const OUTDOOR_STAIRS: &str = "Nous créons des escaliers extérieurs sur mesure : pierre \
    massive, béton architectonique ou structure métallique avec marches bois. Étude \
    d'ergonomie, fondations adaptées au terrain, main courante inox et intégration \
    d'éclairage LED dans les contremarches.";

const OUTDOOR_FENCE: &str = "Notre gamme de clôtures et brise-vues haut de gamme : panneaux \
    bois claire-voie, lames composites, claustras en aluminium thermolaqué ou gabions en \
    pierre. Nous installons également des portails motorisés assortis, dans le respect des \
    règles d'urbanisme.";

const OUTDOOR_ROCKWORK: &str = "L'enrochement paysager assure la stabilité d'un talus tout en \
    structurant le jardin. Blocs de pierre locale posés en gradins, drainages à l'arrière et \
    intégration de plantations rupestres. Une solution idéale pour les terrains en pente.";

const OUTDOOR_GENERAL: &str = "Nos aménagements extérieurs couvrent les terrasses bois ou \
    composite, les dallages en pierre naturelle, les escaliers paysagers, les enrochements et \
    les clôtures design. Chaque projet est conçu sur mesure selon votre terrain. \
    Souhaitez-vous des précisions sur le budget, les délais, le type de solution, les \
    garanties ou le déroulement du chantier ?";

const CONTAINER_POOL_HOUSE: &str = "Nos pool houses containers sont livrés clé en main : \
    douche, WC, espace rangement pour le matériel de piscine et coin détente. Isolation \
    thermique 120 mm, larges baies vitrées aluminium et bardage bois. Installation sur plots \
    ou dalle en une journée.";

const CONTAINER_OFFICE: &str = "Nos containers bureaux, ateliers et studios offrent de \
    véritables espaces de travail indépendants : isolation performante thermique et \
    acoustique, menuiseries double vitrage, électricité complète et climatisation \
    réversible. Configurations modulaires de 15 à 60 m².";

const CONTAINER_PRICE: &str = "Le budget d'un container architectural dépend du niveau \
    d'aménagement : container brut isolé à partir de 15 000 €, version semi-aménagée entre \
    25 000 € et 35 000 €, pool house ou bureau clé en main entre 35 000 € et 55 000 €. \
    Demandez une étude personnalisée pour un chiffrage précis.";

const CONTAINER_GENERAL: &str = "Nous transformons des containers maritimes en espaces \
    architecturaux : pool houses équipés, bureaux de jardin, ateliers et studios \
    indépendants. Structure acier, isolation thermique renforcée, menuiseries aluminium et \
    bardage au choix. Quel usage envisagez-vous ? Je peux aussi vous renseigner sur le \
    budget, les délais, les garanties ou le déroulement.";

const FALLBACK: &str = "Je suis l'assistant Éclat de Jardin. Je peux vous renseigner sur nos \
    piscines (coque, maçonnée, container), nos aménagements extérieurs (terrasses, escaliers, \
    clôtures, enrochements) et nos containers architecturaux (pool house, bureau, atelier), \
    ainsi que sur nos délais, tarifs, zones d'intervention et garanties. Comment puis-je vous \
    aider précisément ?";

/// Look up the canned reply for a detected intent.
pub fn response_for(intent: Intent) -> &'static str {
    match intent {
        Intent::Empty => EMPTY,
        Intent::Greeting => GREETING,
        Intent::Thanks => THANKS,
        Intent::Contact => CONTACT,
        Intent::LeadTime => LEAD_TIME,
        Intent::Zone => ZONE,
        Intent::Guarantee => GUARANTEE,
        Intent::Process => PROCESS,
        Intent::Company => COMPANY,
        Intent::Pool(PoolIntent::Price) => POOL_PRICE,
        Intent::Pool(PoolIntent::Container) => POOL_CONTAINER,
        Intent::Pool(PoolIntent::Shell) => POOL_SHELL,
        Intent::Pool(PoolIntent::Masonry) => POOL_MASONRY,
        Intent::Pool(PoolIntent::Filtration) => POOL_FILTRATION,
        Intent::Pool(PoolIntent::General) => POOL_GENERAL,
        Intent::Outdoor(OutdoorIntent::Deck) => OUTDOOR_DECK,
        Intent::Outdoor(OutdoorIntent::Stairs) => OUTDOOR_STAIRS,
        Intent::Outdoor(OutdoorIntent::Fence) => OUTDOOR_FENCE,
        Intent::Outdoor(OutdoorIntent::Rockwork) => OUTDOOR_ROCKWORK,
        Intent::Outdoor(OutdoorIntent::General) => OUTDOOR_GENERAL,
        Intent::Container(ContainerIntent::PoolHouse) => CONTAINER_POOL_HOUSE,
        Intent::Container(ContainerIntent::Office) => CONTAINER_OFFICE,
        Intent::Container(ContainerIntent::Price) => CONTAINER_PRICE,
        Intent::Container(ContainerIntent::General) => CONTAINER_GENERAL,
        Intent::Fallback => FALLBACK,
    }
}

//! Municipality code directory
//! Maps New Jersey 4-digit municipality codes (county prefix + ordinal) to municipality names

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;

use crate::error::{DirectoryError, Result};
use crate::models::MunicipalityRecord;

/// Municipality name mapping - code to uppercase name as recorded in the parcel data
pub static MUNI_NAMES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // Atlantic (01)
    m.insert("0101", "ABSECON");
    m.insert("0102", "ATLANTIC");
    m.insert("0103", "BRIGANTINE");
    m.insert("0104", "BUENA");
    m.insert("0105", "BUENA VISTA");
    m.insert("0106", "CORBIN");
    m.insert("0107", "EGG HARBOR");
    m.insert("0108", "EGG HARBOR");
    m.insert("0109", "ESTELL MANOR");
    m.insert("0110", "FOLSOM");
    m.insert("0111", "GALLOWAY");
    m.insert("0112", "HAMILTON");
    m.insert("0113", "HAMMONTON");
    m.insert("0114", "LINWOOD");
    m.insert("0115", "LONGPORT");
    m.insert("0116", "MARGATE");
    m.insert("0117", "MULLICA");
    m.insert("0118", "NORTHFIELD");
    m.insert("0119", "PLEASANTVILLE");
    m.insert("0120", "PORT REPUBLIC");
    m.insert("0121", "SOMERS POINT");
    m.insert("0122", "VENTNOR");
    m.insert("0123", "WEYMOUTH");

    // Bergen (02)
    m.insert("0201", "ALLENDALE");
    m.insert("0202", "ALPINE");
    m.insert("0203", "BERGENFIELD");
    m.insert("0204", "BOGOTA");
    m.insert("0205", "CARLSTADT");
    m.insert("0206", "CLIFFSIDE PARK");
    m.insert("0207", "CLOSTER");
    m.insert("0208", "CRESSKILL");
    m.insert("0209", "DEMAREST");
    m.insert("0210", "DUMONT");
    m.insert("0211", "ELMWOOD PARK");
    m.insert("0212", "E RUTHERFORD");
    m.insert("0213", "EDGEWATER");
    m.insert("0214", "EMERSON");
    m.insert("0215", "ENGLEWOOD");
    m.insert("0216", "ENGLEWOOD CLIFFS");
    m.insert("0217", "FAIRLAWN");
    m.insert("0218", "FAIRVIEW");
    m.insert("0219", "FORT LEE");
    m.insert("0220", "FRANKLIN LAKES");
    m.insert("0221", "GARFIELD");
    m.insert("0222", "GLEN ROCK");
    m.insert("0223", "HACKENSACK");
    m.insert("0224", "HARRINGTON PARK");
    m.insert("0225", "HASBROUCK HGHTS");
    m.insert("0226", "HAWORTH");
    m.insert("0227", "HILLSDALE");
    m.insert("0228", "HOHOKUS");
    m.insert("0229", "LEONIA");
    m.insert("0230", "LITTLE FERRY");
    m.insert("0231", "LODI");
    m.insert("0232", "LYNDHURST");
    m.insert("0233", "MAHWAH");
    m.insert("0234", "MAYWOOD");
    m.insert("0235", "MIDLAND PARK");
    m.insert("0236", "MONTVALE");
    m.insert("0237", "MOONACHIE");
    m.insert("0238", "NEW MILFORD");
    m.insert("0239", "NORTH ARLINGTON");
    m.insert("0240", "NORTHVALE");
    m.insert("0241", "NORWOOD");
    m.insert("0242", "OAKLAND");
    m.insert("0243", "OLD TAPPAN");
    m.insert("0244", "ORADELL");
    m.insert("0245", "PALISADES PARK");
    m.insert("0246", "PARAMUS");
    m.insert("0247", "PARK RIDGE");
    m.insert("0248", "RAMSEY");
    m.insert("0249", "RIDGEFIELD");
    m.insert("0250", "RIDGEFIELD PARK VILLAGE");
    m.insert("0251", "RIDGEWOOD VILLAGE");
    m.insert("0252", "RIVEREDGE");
    m.insert("0253", "RIVERVALE");
    m.insert("0254", "ROCHELLE PARK");
    m.insert("0255", "ROCKLEIGH");
    m.insert("0256", "RUTHERFORD");
    m.insert("0257", "SADDLE BROOK");
    m.insert("0258", "SADDLE RIVER");
    m.insert("0259", "SO HACKENSACK");
    m.insert("0260", "TEANECK");
    m.insert("0261", "TENAFLY");
    m.insert("0262", "TETERBORO");
    m.insert("0263", "UPPER SADDLE RIV");
    m.insert("0264", "WALDWICK");
    m.insert("0265", "WALLINGTON");
    m.insert("0266", "WASHINGTON");
    m.insert("0267", "WESTWOOD");
    m.insert("0268", "WOODCLIFF LAKE");
    m.insert("0269", "WOOD RIDGE");
    m.insert("0270", "WYCKOFF");

    // Burlington (03)
    m.insert("0301", "BASS RIVER");
    m.insert("0302", "BEVERLY");
    m.insert("0303", "BORDENTOWN");
    m.insert("0304", "BORDENTOWN");
    m.insert("0305", "BURLINGTON");
    m.insert("0306", "BURLINGTON");
    m.insert("0307", "CHESTERFIELD");
    m.insert("0308", "CINNAMINSON");
    m.insert("0309", "DELANCO");
    m.insert("0310", "DELRAN");
    m.insert("0311", "EASTAMPTON");
    m.insert("0312", "EDGEWATER PARK");
    m.insert("0313", "EVESHAM");
    m.insert("0314", "FIELDSBORO");
    m.insert("0315", "FLORENCE");
    m.insert("0316", "HAINESPORT");
    m.insert("0317", "LUMBERTON");
    m.insert("0318", "MANSFIELD");
    m.insert("0319", "MAPLE SHADE");
    m.insert("0320", "MEDFORD");
    m.insert("0321", "MEDFORD LAKES");
    m.insert("0322", "MOORESTOWN");
    m.insert("0323", "MT HOLLY");
    m.insert("0324", "MT LAUREL");
    m.insert("0325", "NEW HANOVER");
    m.insert("0326", "NO HANOVER");
    m.insert("0327", "PALMYRA");
    m.insert("0328", "PEMBERTON");
    m.insert("0329", "PEMBERTON");
    m.insert("0330", "RIVERSIDE");
    m.insert("0331", "RIVERTON");
    m.insert("0332", "SHAMONG");
    m.insert("0333", "SOUTHAMPTON");
    m.insert("0334", "SPRINGFIELD");
    m.insert("0335", "TABERNACLE");
    m.insert("0336", "WASHINGTON");
    m.insert("0337", "WESTAMPTON");
    m.insert("0338", "WILLINGBORO");
    m.insert("0339", "WOODLAND");
    m.insert("0340", "WRIGHTSTOWN");

    // Camden (04)
    m.insert("0401", "AUDUBON");
    m.insert("0402", "AUDUBON PARK");
    m.insert("0403", "BARRINGTON");
    m.insert("0404", "BELLMAWR");
    m.insert("0405", "BERLIN");
    m.insert("0406", "BERLIN");
    m.insert("0407", "BROOKLAWN");
    m.insert("0408", "CAMDEN");
    m.insert("0409", "CHERRY HILL TWNSHP");
    m.insert("0410", "CHESILHURST");
    m.insert("0411", "CLEMENTON");
    m.insert("0412", "COLLINGSWOOD");
    m.insert("0413", "GIBBSBORO");
    m.insert("0414", "GLOUCESTER");
    m.insert("0415", "GLOUCESTER");
    m.insert("0416", "HADDON");
    m.insert("0417", "HADDONFIELD");
    m.insert("0418", "HADDON HEIGHTS");
    m.insert("0419", "HI NELLA");
    m.insert("0420", "LAUREL SPRINGS");
    m.insert("0421", "LAWNSIDE");
    m.insert("0422", "LINDENWOLD");
    m.insert("0423", "MAGNOLIA");
    m.insert("0424", "MERCHANTVILLE");
    m.insert("0425", "MOUNT EPHRAIM");
    m.insert("0426", "OAKLYN");
    m.insert("0427", "PENNSAUKEN");
    m.insert("0428", "PINE HILL");
    m.insert("0429", "PINE VALLEY");
    m.insert("0430", "RUNNEMEDE");
    m.insert("0431", "SOMERDALE");
    m.insert("0432", "STRATFORD");
    m.insert("0433", "TAVISTOCK");
    m.insert("0434", "VOORHEES");
    m.insert("0435", "WATERFORD");
    m.insert("0436", "WINSLOW");
    m.insert("0437", "WOODLYNNE");

    // Cape May (05)
    m.insert("0501", "AVALON");
    m.insert("0502", "CAPE MAY");
    m.insert("0503", "CAPE MAY POINT");
    m.insert("0504", "DENNIS");
    m.insert("0505", "LOWER");
    m.insert("0506", "MIDDLE");
    m.insert("0507", "NORTH WILDWOOD");
    m.insert("0508", "OCEAN");
    m.insert("0509", "SEA ISLE");
    m.insert("0510", "STONE HARBOR");
    m.insert("0511", "UPPER");
    m.insert("0512", "WEST CAPE MAY");
    m.insert("0513", "WEST WILDWOOD");
    m.insert("0514", "WILDWOOD");
    m.insert("0515", "WILDWOOD CREST");
    m.insert("0516", "WOODBINE");

    // Cumberland (06)
    m.insert("0601", "BRIDGETON");
    m.insert("0602", "COMMERCIAL");
    m.insert("0603", "DEERFIELD");
    m.insert("0604", "DOWNE");
    m.insert("0605", "FAIRFIELD");
    m.insert("0606", "GREENWICH");
    m.insert("0607", "HOPEWELL");
    m.insert("0608", "LAWRENCE");
    m.insert("0609", "MAURICE RIVER");
    m.insert("0610", "MILLVILLE");
    m.insert("0611", "SHILOH");
    m.insert("0612", "STOW CREEK");
    m.insert("0613", "UPPER DEERFIELD");
    m.insert("0614", "VINELAND");

    // Essex (07)
    m.insert("0701", "BELLEVILLE");
    m.insert("0702", "BLOOMFIELD");
    m.insert("0703", "CALDWELL");
    m.insert("0704", "CEDAR GROVE");
    m.insert("0705", "EAST ORANGE");
    m.insert("0706", "ESSEX FELLS");
    m.insert("0707", "FAIRFIELD");
    m.insert("0708", "GLEN RIDGE");
    m.insert("0709", "IRVINGTON");
    m.insert("0710", "LIVINGSTON");
    m.insert("0711", "MAPLEWOOD");
    m.insert("0712", "MILLBURN");
    m.insert("0713", "MONTCLAIR");
    m.insert("0714", "NEWARK");
    m.insert("0715", "NORTH CALDWELL");
    m.insert("0716", "NUTLEY");
    m.insert("0717", "ORANGE");
    m.insert("0718", "ROSELAND");
    m.insert("0719", "SOUTH ORANGE VILLAGE");
    m.insert("0720", "VERONA");
    m.insert("0721", "WEST CALDWELL");
    m.insert("0722", "WEST ORANGE");

    // Gloucester (08)
    m.insert("0801", "CLAYTON");
    m.insert("0802", "DEPTFORD");
    m.insert("0803", "EAST GREENWICH");
    m.insert("0804", "ELK");
    m.insert("0805", "FRANKLIN");
    m.insert("0806", "GLASSBORO");
    m.insert("0807", "GREENWICH");
    m.insert("0808", "HARRISON");
    m.insert("0809", "LOGAN");
    m.insert("0810", "MANTUA");
    m.insert("0811", "MONROE");
    m.insert("0812", "NATIONAL PARK");
    m.insert("0813", "NEWFIELD");
    m.insert("0814", "PAULSBORO");
    m.insert("0815", "PITMAN");
    m.insert("0816", "SO HARRISON");
    m.insert("0817", "SWEDESBORO");
    m.insert("0818", "WASHINGTON");
    m.insert("0819", "WENONAH");
    m.insert("0820", "WEST DEPTFORD");
    m.insert("0821", "WESTVILLE");
    m.insert("0822", "WOODBURY");
    m.insert("0823", "WOODBURY HEIGHTS");
    m.insert("0824", "WOOLWICH");

    // Hudson (09)
    m.insert("0901", "BAYONNE");
    m.insert("0902", "EAST NEWARK");
    m.insert("0903", "GUTTENBERG");
    m.insert("0904", "HARRISON");
    m.insert("0905", "HOBOKEN");
    m.insert("0906", "JERSEY");
    m.insert("0907", "KEARNY");
    m.insert("0908", "NORTH BERGEN");
    m.insert("0909", "SECAUCUS");
    m.insert("0910", "UNION");
    m.insert("0911", "WEEHAWKEN");
    m.insert("0912", "WEST NEW YORK");

    // Hunterdon (10)
    m.insert("1001", "ALEXANDRIA");
    m.insert("1002", "BETHLEHEM");
    m.insert("1003", "BLOOMSBURY");
    m.insert("1004", "CALIFON");
    m.insert("1005", "CLINTON");
    m.insert("1006", "CLINTON");
    m.insert("1007", "DELAWARE");
    m.insert("1008", "EAST AMWELL");
    m.insert("1009", "FLEMINGTON");
    m.insert("1010", "FRANKLIN");
    m.insert("1011", "FRENCHTOWN");
    m.insert("1012", "GLEN GARDNER");
    m.insert("1013", "HAMPTON");
    m.insert("1014", "HIGH BRIDGE");
    m.insert("1015", "HOLLAND");
    m.insert("1016", "KINGWOOD");
    m.insert("1017", "LAMBERTVILLE");
    m.insert("1018", "LEBANON");
    m.insert("1019", "LEBANON");
    m.insert("1020", "MILFORD");
    m.insert("1021", "RARITAN");
    m.insert("1022", "READINGTON");
    m.insert("1023", "STOCKTON");
    m.insert("1024", "TEWKSBURY");
    m.insert("1025", "UNION");
    m.insert("1026", "WEST AMWELL");

    // Mercer (11)
    m.insert("1101", "EAST WINDSOR");
    m.insert("1102", "EWING");
    m.insert("1103", "HAMILTON");
    m.insert("1104", "HIGHTSTOWN");
    m.insert("1105", "HOPEWELL");
    m.insert("1106", "HOPEWELL");
    m.insert("1107", "LAWRENCE");
    m.insert("1108", "PENNINGTON");
    m.insert("1111", "TRENTON");
    m.insert("1112", "ROBBINSVILLE");
    m.insert("1113", "WEST WINDSOR");
    m.insert("1114", "PRINCETON");

    // Middlesex (12)
    m.insert("1201", "CARTERET");
    m.insert("1202", "CRANBURY");
    m.insert("1203", "DUNELLEN");
    m.insert("1204", "EAST BRUNSWICK");
    m.insert("1205", "EDISON");
    m.insert("1206", "HELMETTA");
    m.insert("1207", "HIGHLAND PARK");
    m.insert("1208", "JAMESBURG");
    m.insert("1209", "METUCHEN");
    m.insert("1210", "MIDDLESEX");
    m.insert("1211", "MILLTOWN");
    m.insert("1212", "MONROE");
    m.insert("1213", "NEW BRUNSWICK");
    m.insert("1214", "NORTH BRUNSWICK");
    m.insert("1215", "OLD BRIDGE");
    m.insert("1216", "PERTH AMBOY");
    m.insert("1217", "PISCATAWAY");
    m.insert("1218", "PLAINSBORO");
    m.insert("1219", "SAYREVILLE");
    m.insert("1220", "SOUTH AMBOY");
    m.insert("1221", "SOUTH BRUNSWICK");
    m.insert("1222", "SOUTH PLAINFIELD");
    m.insert("1223", "SOUTH RIVER");
    m.insert("1224", "SPOTSWOOD");
    m.insert("1225", "WOODBRIDGE");

    // Monmouth (13)
    m.insert("1301", "ABERDEEN");
    m.insert("1302", "ALLENHURST");
    m.insert("1303", "ALLENTOWN");
    m.insert("1304", "ASBURY PARK");
    m.insert("1305", "ATLANTIC HIGHLANDS");
    m.insert("1306", "AVON BY THE SEA");
    m.insert("1307", "BELMAR");
    m.insert("1308", "BRADLEY BEACH");
    m.insert("1309", "BRIELLE");
    m.insert("1310", "COLTS NECK");
    m.insert("1311", "DEAL");
    m.insert("1312", "EATONTOWN");
    m.insert("1313", "ENGLISHTOWN");
    m.insert("1314", "FAIR HAVEN");
    m.insert("1315", "FARMINGDALE");
    m.insert("1316", "FREEHOLD");
    m.insert("1317", "FREEHOLD");
    m.insert("1318", "HAZLET");
    m.insert("1319", "HIGHLANDS");
    m.insert("1320", "HOLMDEL");
    m.insert("1321", "HOWELL");
    m.insert("1322", "INTERLAKEN");
    m.insert("1323", "KEANSBURG");
    m.insert("1324", "KEYPORT");
    m.insert("1325", "LITTLE SILVER");
    m.insert("1326", "LOCH ARBOUR VILLAGE");
    m.insert("1327", "LONG BRANCH");
    m.insert("1328", "MANALAPAN");
    m.insert("1329", "MANASQUAN");
    m.insert("1330", "MARLBORO");
    m.insert("1331", "MATAWAN");
    m.insert("1332", "MIDDLETOWN");
    m.insert("1333", "MILLSTONE");
    m.insert("1334", "MONMOUTH BEACH");
    m.insert("1335", "NEPTUNE");
    m.insert("1336", "NEPTUNE");
    m.insert("1337", "OCEAN");
    m.insert("1338", "OCEANPORT");
    m.insert("1339", "RED BANK");
    m.insert("1340", "ROOSEVELT");
    m.insert("1341", "RUMSON");
    m.insert("1342", "SEA BRIGHT");
    m.insert("1343", "SEA GIRT");
    m.insert("1344", "SHREWSBURY");
    m.insert("1345", "SHREWSBURY");
    m.insert("1346", "LAKE COMO");
    m.insert("1347", "SPRING LAKE");
    m.insert("1348", "SPRING LAKE HEIGHTS");
    m.insert("1349", "TINTON FALLS");
    m.insert("1350", "UNION BEACH");
    m.insert("1351", "UPPER FREEHOLD");
    m.insert("1352", "WALL");
    m.insert("1353", "WEST LONG BRANCH");

    // Morris (14)
    m.insert("1401", "BOONTON");
    m.insert("1402", "BOONTON");
    m.insert("1403", "BUTLER");
    m.insert("1404", "CHATHAM");
    m.insert("1405", "CHATHAM");
    m.insert("1406", "CHESTER");
    m.insert("1407", "CHESTER");
    m.insert("1408", "DENVILLE");
    m.insert("1409", "DOVER");
    m.insert("1410", "EAST HANOVER");
    m.insert("1411", "FLORHAM PARK");
    m.insert("1412", "HANOVER");
    m.insert("1413", "HARDING");
    m.insert("1414", "JEFFERSON");
    m.insert("1415", "KINNELON");
    m.insert("1416", "LINCOLN PARK");
    m.insert("1417", "MADISON");
    m.insert("1418", "MENDHAM");
    m.insert("1419", "MENDHAM");
    m.insert("1420", "MINE HILL");
    m.insert("1421", "MONTVILLE");
    m.insert("1422", "MORRIS");
    m.insert("1423", "MORRIS PLAINS");
    m.insert("1424", "MORRISTOWN");
    m.insert("1425", "MOUNTAIN LAKES");
    m.insert("1426", "MOUNT ARLINGTON");
    m.insert("1427", "MOUNT OLIVE");
    m.insert("1428", "NETCONG");
    m.insert("1429", "PARSIPPANY TR HLS");
    m.insert("1430", "LONG HILL");
    m.insert("1431", "PEQUANNOCK");
    m.insert("1432", "RANDOLPH");
    m.insert("1433", "RIVERDALE");
    m.insert("1434", "ROCKAWAY");
    m.insert("1435", "ROCKAWAY");
    m.insert("1436", "ROXBURY");
    m.insert("1437", "VICTORY GARDENS");
    m.insert("1438", "WASHINGTON");
    m.insert("1439", "WHARTON");

    // Ocean (15)
    m.insert("1501", "BARNEGAT");
    m.insert("1502", "BARNEGAT LIGHT");
    m.insert("1503", "BAY HEAD");
    m.insert("1504", "BEACH HAVEN");
    m.insert("1505", "BEACHWOOD");
    m.insert("1506", "BERKELEY");
    m.insert("1507", "BRICK");
    m.insert("1508", "TOMS RIVER");
    m.insert("1509", "EAGLESWOOD");
    m.insert("1510", "HARVEY CEDARS");
    m.insert("1511", "ISLAND HEIGHTS");
    m.insert("1512", "JACKSON");
    m.insert("1513", "LACEY");
    m.insert("1514", "LAKEHURST");
    m.insert("1515", "LAKEWOOD");
    m.insert("1516", "LAVALLETTE");
    m.insert("1517", "LITTLE EGG HARBOR");
    m.insert("1518", "LONG BEACH");
    m.insert("1519", "MANCHESTER");
    m.insert("1520", "MANTOLOKING");
    m.insert("1521", "OCEAN");
    m.insert("1522", "OCEAN GATE");
    m.insert("1523", "PINE BEACH");
    m.insert("1524", "PLUMSTED");
    m.insert("1525", "POINT PLEASANT");
    m.insert("1526", "PT PLEASANT BEACH");
    m.insert("1527", "SEASIDE HEIGHTS");
    m.insert("1528", "SEASIDE PARK");
    m.insert("1529", "SHIP BOTTOM");
    m.insert("1530", "SOUTH TOMS RIVER");
    m.insert("1531", "STAFFORD");
    m.insert("1532", "SURF");
    m.insert("1533", "TUCKERTON");

    // Passaic (16)
    m.insert("1601", "BLOOMINGDALE");
    m.insert("1602", "CLIFTON");
    m.insert("1603", "HALEDON");
    m.insert("1604", "HAWTHORNE");
    m.insert("1605", "LITTLE FALLS");
    m.insert("1606", "NORTH HALEDON");
    m.insert("1607", "PASSAIC");
    m.insert("1608", "PATERSON");
    m.insert("1609", "POMPTON LAKES");
    m.insert("1610", "PROSPECT PARK");
    m.insert("1611", "RINGWOOD");
    m.insert("1612", "TOTOWA");
    m.insert("1613", "WANAQUE");
    m.insert("1614", "WAYNE");
    m.insert("1615", "WEST MILFORD");
    m.insert("1616", "WOODLAND PARK");

    // Salem (17)
    m.insert("1701", "ALLOWAY TOWNSHIP");
    m.insert("1702", "CARNEYS POINT TOWNSHIP");
    m.insert("1703", "ELMER");
    m.insert("1704", "ELSINBORO");
    m.insert("1705", "LOWER ALLOWAY CREEK");
    m.insert("1706", "MANNINGTON");
    m.insert("1707", "OLDMANS");
    m.insert("1708", "PENNS GROVE");
    m.insert("1709", "PENNSVILLE");
    m.insert("1710", "PILESGROVE");
    m.insert("1711", "PITTSGROVE");
    m.insert("1712", "QUINTON");
    m.insert("1713", "SALEM");
    m.insert("1714", "UPPER PITTSGROVE");
    m.insert("1715", "WOODSTOWN");

    // Somerset (18)
    m.insert("1801", "BEDMINSTER");
    m.insert("1802", "BERNARDS");
    m.insert("1803", "BERNARDSVILLE");
    m.insert("1804", "BOUND BROOK");
    m.insert("1805", "BRANCHBURG");
    m.insert("1806", "BRIDGEWATER");
    m.insert("1807", "FAR HILLS");
    m.insert("1808", "FRANKLIN");
    m.insert("1809", "GREEN BROOK");
    m.insert("1810", "HILLSBORO");
    m.insert("1811", "MANVILLE");
    m.insert("1812", "MILLSTONE");
    m.insert("1813", "MONTGOMERY");
    m.insert("1814", "NORTH PLAINFIELD");
    m.insert("1815", "PEAPACK GLADSTONE");
    m.insert("1816", "RARITAN");
    m.insert("1817", "ROCKY HILL");
    m.insert("1818", "SOMERVILLE");
    m.insert("1819", "SO BOUND BROOK");
    m.insert("1820", "WARREN");
    m.insert("1821", "WATCHUNG");

    // Sussex (19)
    m.insert("1901", "ANDOVER");
    m.insert("1902", "ANDOVER");
    m.insert("1903", "BRANCHVILLE");
    m.insert("1904", "BYRAM");
    m.insert("1905", "FRANKFORD");
    m.insert("1906", "FRANKLIN");
    m.insert("1907", "FREDON");
    m.insert("1908", "GREEN");
    m.insert("1909", "HAMBURG");
    m.insert("1910", "HAMPTON");
    m.insert("1911", "HARDYSTON");
    m.insert("1912", "HOPATCONG");
    m.insert("1913", "LAFAYETTE");
    m.insert("1914", "MONTAGUE");
    m.insert("1915", "NEWTON");
    m.insert("1916", "OGDENSBURG");
    m.insert("1917", "SANDYSTON");
    m.insert("1918", "SPARTA");
    m.insert("1919", "STANHOPE");
    m.insert("1920", "STILLWATER");
    m.insert("1921", "SUSSEX");
    m.insert("1922", "VERNON");
    m.insert("1923", "WALPACK");
    m.insert("1924", "WANTAGE");

    // Union (20)
    m.insert("2001", "BERKELEY HEIGHTS");
    m.insert("2002", "CLARK");
    m.insert("2003", "CRANFORD");
    m.insert("2004", "ELIZABETH");
    m.insert("2005", "FANWOOD");
    m.insert("2006", "GARWOOD");
    m.insert("2007", "HILLSIDE");
    m.insert("2008", "KENILWORTH");
    m.insert("2009", "LINDEN");
    m.insert("2010", "MOUNTAINSIDE");
    m.insert("2011", "NEW PROVIDENCE");
    m.insert("2012", "PLAINFIELD");
    m.insert("2013", "RAHWAY");
    m.insert("2014", "ROSELLE");
    m.insert("2015", "ROSELLE PARK");
    m.insert("2016", "SCOTCH PLAINS");
    m.insert("2017", "SPRINGFIELD");
    m.insert("2018", "SUMMIT");
    m.insert("2019", "UNION");
    m.insert("2020", "WESTFIELD");
    m.insert("2021", "WINFIELD");

    // Warren (21)
    m.insert("2101", "ALLAMUCHY");
    m.insert("2102", "ALPHA");
    m.insert("2103", "BELVIDERE");
    m.insert("2104", "BLAIRSTOWN");
    m.insert("2105", "FRANKLIN");
    m.insert("2106", "FRELINGHUYSEN");
    m.insert("2107", "GREENWICH");
    m.insert("2108", "HACKETTSTOWN");
    m.insert("2109", "HARDWICK");
    m.insert("2110", "HARMONY");
    m.insert("2111", "HOPE");
    m.insert("2112", "INDEPENDENCE");
    m.insert("2113", "KNOWLTON");
    m.insert("2114", "LIBERTY");
    m.insert("2115", "LOPATCONG");
    m.insert("2116", "MANSFIELD");
    m.insert("2117", "OXFORD");
    m.insert("2119", "PHILLIPSBURG");
    m.insert("2120", "POHATCONG");
    m.insert("2121", "WASHINGTON");
    m.insert("2122", "WASHINGTON");
    m.insert("2123", "WHITE");

    debug!(entries = m.len(), "municipality directory built");
    m
});

/// Every record, sorted by code once on first use
static SORTED_RECORDS: LazyLock<Vec<MunicipalityRecord>> = LazyLock::new(|| {
    let mut all: Vec<MunicipalityRecord> = MUNI_NAMES
        .iter()
        .map(|(&code, &name)| MunicipalityRecord::new(code, name))
        .collect();
    all.sort_unstable_by_key(|r| r.code());
    all
});

/// Look up the municipality name for a code. Codes are matched verbatim.
pub fn lookup(code: &str) -> Result<&'static str> {
    get_record(code).map(|record| record.name())
}

/// Same as [`lookup`], returning the full record.
pub fn get_record(code: &str) -> Result<MunicipalityRecord> {
    MUNI_NAMES
        .get_key_value(code)
        .map(|(&code, &name)| MunicipalityRecord::new(code, name))
        .ok_or_else(|| {
            debug!(code, "municipality code not found");
            DirectoryError::CodeNotFound(code.to_string())
        })
}

/// All records in ascending code order
pub fn records() -> impl Iterator<Item = MunicipalityRecord> {
    SORTED_RECORDS.iter().copied()
}

/// Records whose code starts with the given two-digit county prefix
pub fn in_county(county_code: &str) -> Vec<MunicipalityRecord> {
    records()
        .filter(|r| r.county_code() == county_code)
        .collect()
}

pub fn len() -> usize {
    MUNI_NAMES.len()
}

/*!
# Functions

Function names aren't keywords; they are recognized by name and can't
be used as variables.

| Function | |
|---|---|
| `ABS(n)` | Absolute value |
| `SGN(n)` | -1, 0 or 1 by the sign of n |
| `RND(n)` | A random number from 1 to n |
| `PEEK(a)` | The byte at address a of the memory page |
| `LEN(s$)` | Length of a string |
| `CODE(s$)` | Character code of the first character, 0 if empty |
| `VAL(s$)` | The number written in a string |
| `CHR$(n)` | The character with code n |
| `STR$(n)` | A number as a string |
| `TIME` | Seconds since the interpreter started |

`RND` with n less than 1 and `CHR$` of a code outside 0 to 63 are
`ARITHMETIC OVERFLOW`. `VAL` of anything but a number, with an
optional sign, is a syntax error.

```text
10 PRINT CHR$(CODE("A")+1)
20 PRINT LEN(STR$(-120))
RUN
B
4
0/20
```

*/

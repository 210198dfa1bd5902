/*!
# `POKE <address>,<value>`

## Purpose
Stores a byte in the memory page.

## Remarks
Addresses start at 0. An address past the page is
`SUBSCRIPT OUT OF RANGE`. A value outside 0 to 255 is
`ARITHMETIC OVERFLOW`. `PEEK` reads it back.

## Example
```text
POKE 10,200
PRINT PEEK(10)
200
0/0
```

*/
